use std::io::Write;

use binedge_core::{Arguments, Client};

use crate::cli::SearchArgs;
use crate::error::CliError;
use crate::output::JsonPrinter;

use super::print_operation;

pub fn run<W: Write>(
    args: &SearchArgs,
    client: &Client,
    printer: &mut JsonPrinter<W>,
) -> Result<(), CliError> {
    print_operation(
        client,
        printer,
        args.index.operation(),
        &Arguments::query(args.query.as_str()),
        Some(&args.paging),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cli::{PagingArgs, SearchIndex};
    use crate::commands::test_support::{client, printer, ScriptedHttpClient};

    #[test]
    fn bounded_image_search_stops_at_last_page() {
        let page = |n: u32| json!({"page": n, "pagesize": 1, "events": [{"tag": "webcam"}]});
        let http = ScriptedHttpClient::json(vec![page(2), page(3), page(4)]);
        let client = client(&http);
        let mut out = printer();

        let args = SearchArgs {
            query: String::from("tag:webcam"),
            index: SearchIndex::Images,
            paging: PagingArgs {
                page: 2,
                max_pages: Some(3),
                all: false,
            },
        };
        run(&args, &client, &mut out).expect("search should succeed");

        assert_eq!(
            http.urls(),
            vec![
                String::from("https://api.example.test/v2/query/image/search?query=tag%3Awebcam&page=2"),
                String::from("https://api.example.test/v2/query/image/search?query=tag%3Awebcam&page=3"),
            ]
        );
    }
}
