//! Control loop round trips against a mock directory.

use std::sync::Arc;

use filmvilla::directory::OmdbClient;
use filmvilla::worker::{DirectoryResponse, DirectoryWorker};
use filmvilla::{handle_event, Action, AppState, Config, Event, PageDelta, Phase, SortMode};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    state: AppState,
    worker: DirectoryWorker,
    tx: UnboundedSender<DirectoryResponse>,
    rx: UnboundedReceiver<DirectoryResponse>,
}

impl Harness {
    fn new(server: &MockServer) -> Self {
        let config = Config {
            api_key: Some("test-key".to_string()),
            base_url: format!("{}/", server.uri()),
            theme_name: Some("plain".to_string()),
            ..Config::default()
        };
        let client = OmdbClient::from_config(&config).expect("client");
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            state: filmvilla::initialize(&config),
            worker: DirectoryWorker::new(Arc::new(client)),
            tx,
            rx,
        }
    }

    /// Handles `event`, dispatches its requests and returns how many went out.
    fn send(&mut self, event: Event) -> usize {
        let (_, actions) = handle_event(&mut self.state, &event).expect("handled");
        let mut dispatched = 0;
        for action in actions {
            if let Action::Dispatch(request) = action {
                self.worker.dispatch(request, self.tx.clone());
                dispatched += 1;
            }
        }
        dispatched
    }

    /// Feeds the next `count` completions back through the handler.
    async fn settle(&mut self, count: usize) {
        for _ in 0..count {
            let response = self.rx.recv().await.expect("response");
            self.send(Event::DirectoryResponse(response));
        }
    }
}

fn batman_page(page: u32) -> String {
    let items = (0..10)
        .map(|i| {
            format!(
                r#"{{"Title":"Batman {page}-{i}","Year":"{}","imdbID":"tt{page}{i:06}","Type":"movie","Poster":"N/A"}}"#,
                1990 + i
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"Search":[{items}],"totalResults":"25","Response":"True"}}"#)
}

async fn mount_batman(server: &MockServer) {
    for page in 1..=3u32 {
        Mock::given(method("GET"))
            .and(query_param("s", "batman"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_raw(batman_page(page), "application/json"))
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn search_then_page_forward() {
    let server = MockServer::start().await;
    mount_batman(&server).await;
    let mut harness = Harness::new(&server);

    let sent = harness.send(Event::Submit { query: "batman".to_string() });
    assert!(harness.state.loading);
    harness.settle(sent).await;

    assert_eq!(harness.state.phase, Phase::Loaded);
    assert_eq!(harness.state.results.len(), 10);
    assert_eq!(harness.state.page, 1);
    assert_eq!(harness.state.total_pages(), 3);
    assert!(!harness.state.loading);

    assert_eq!(harness.send(Event::GotoPage(PageDelta::Previous)), 0);

    let sent = harness.send(Event::GotoPage(PageDelta::Next));
    harness.settle(sent).await;
    assert_eq!(harness.state.page, 2);
    assert!(harness.state.results.iter().all(|m| m.title.starts_with("Batman 2-")));
}

#[tokio::test]
async fn unknown_title_and_outage_both_empty_the_grid() {
    let server = MockServer::start().await;
    mount_batman(&server).await;
    Mock::given(method("GET"))
        .and(query_param("s", "zzzxxqq"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Response":"False","Error":"Movie not found!"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("s", "outage"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let mut harness = Harness::new(&server);

    let sent = harness.send(Event::Submit { query: "batman".to_string() });
    harness.settle(sent).await;

    let sent = harness.send(Event::Submit { query: "zzzxxqq".to_string() });
    harness.settle(sent).await;
    assert!(harness.state.results.is_empty());
    assert_eq!(harness.state.total_results, 0);
    assert_eq!(harness.state.phase, Phase::Empty);

    let frame = filmvilla::ui::render(&harness.state, 80).expect("frame");
    assert!(frame.contains("No movies found"));

    let sent = harness.send(Event::Submit { query: "outage".to_string() });
    harness.settle(sent).await;
    assert!(harness.state.results.is_empty());
    assert!(!harness.state.loading);

    let frame = filmvilla::ui::render(&harness.state, 80).expect("frame");
    assert!(frame.contains("Could not reach the movie directory"));
}

#[tokio::test]
async fn open_sort_and_close_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "superman"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Search":[
                {"Title":"Superman II","Year":"1980","imdbID":"tt0081573","Type":"movie","Poster":"N/A"},
                {"Title":"Superman","Year":"1978","imdbID":"tt0078346","Type":"movie","Poster":"N/A"},
                {"Title":"Superman Returns","Year":"2006","imdbID":"tt0348150","Type":"movie","Poster":"N/A"}
            ],"totalResults":"3","Response":"True"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("i", "tt0078346"))
        .and(query_param("plot", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Title":"Superman","Year":"1978","Rated":"PG","Runtime":"143 min","Genre":"Action, Adventure, Sci-Fi",
                "Director":"Richard Donner","Actors":"Christopher Reeve","Plot":"An alien orphan is sent to Earth.",
                "imdbRating":"7.4","BoxOffice":"N/A","imdbID":"tt0078346","Type":"movie","Poster":"N/A","Response":"True"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    let mut harness = Harness::new(&server);

    let sent = harness.send(Event::Submit { query: "superman".to_string() });
    harness.settle(sent).await;
    let years: Vec<_> = harness.state.results.iter().map(|m| m.year.as_str()).collect();
    assert_eq!(years, ["2006", "1980", "1978"]);

    assert_eq!(harness.send(Event::SetSortMode(SortMode::ByTitle)), 0);
    let titles: Vec<_> = harness.state.results.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["Superman", "Superman II", "Superman Returns"]);

    let sent = harness.send(Event::SelectIndex(1));
    harness.settle(sent).await;
    let detail = harness.state.selected_detail.as_ref().expect("detail open");
    assert_eq!(detail.title(), "Superman");
    assert_eq!(detail.genres, ["Action", "Adventure", "Sci-Fi"]);
    assert!(detail.box_office.is_none());

    harness.send(Event::CloseDetail);
    assert!(harness.state.selected_detail.is_none());
}
