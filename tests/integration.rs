// SPDX-License-Identifier: MPL-2.0
use comment_wall::app::config::{self, Config};
use comment_wall::application::board::{Board, Effect, NoticeKind, RemoteCall, ReportLevel};
use comment_wall::application::flow::{self, Services};
use comment_wall::application::port::{
    ApiError, CityLocator, CommentApi, LookupError, TranslationError, Translator,
};
use comment_wall::domain::comment::{Comment, CommentId, NewComment, Reaction};
use comment_wall::domain::feedback::Symbol;
use comment_wall::infrastructure::http::google_translate::parse_translation;
use comment_wall::infrastructure::http::ipapi::parse_city;
use comment_wall::strings::Catalog;
use comment_wall::ui::theming::ThemeMode;
use futures_util::future::{self, BoxFuture};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq)]
enum Sent {
    List,
    Create(NewComment),
    React(CommentId, Reaction),
}

/// In-memory comment service that records every call.
struct MemoryApi {
    comments: Mutex<Vec<Comment>>,
    sent: Mutex<Vec<Sent>>,
    fail_mutations: bool,
}

impl MemoryApi {
    fn with(comments: Vec<Comment>) -> Arc<Self> {
        Arc::new(Self {
            comments: Mutex::new(comments),
            sent: Mutex::new(Vec::new()),
            fail_mutations: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            comments: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
            fail_mutations: true,
        })
    }

    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

impl CommentApi for MemoryApi {
    fn list(&self) -> BoxFuture<'static, Result<Vec<Comment>, ApiError>> {
        self.sent.lock().unwrap().push(Sent::List);
        let comments = self.comments.lock().unwrap().clone();
        Box::pin(future::ready(Ok(comments)))
    }

    fn create(&self, comment: NewComment) -> BoxFuture<'static, Result<(), ApiError>> {
        self.sent.lock().unwrap().push(Sent::Create(comment.clone()));
        if self.fail_mutations {
            return Box::pin(future::ready(Err(ApiError::Status(500))));
        }
        let mut comments = self.comments.lock().unwrap();
        let id = CommentId::new(format!("c{}", comments.len() + 1));
        comments.push(Comment {
            id,
            text: comment.text,
            city: comment.city.as_str().to_string(),
            likes: 0,
            dislikes: 0,
        });
        Box::pin(future::ready(Ok(())))
    }

    fn react(
        &self,
        id: CommentId,
        reaction: Reaction,
    ) -> BoxFuture<'static, Result<(), ApiError>> {
        self.sent
            .lock()
            .unwrap()
            .push(Sent::React(id.clone(), reaction));
        if self.fail_mutations {
            return Box::pin(future::ready(Err(ApiError::Status(503))));
        }
        let mut comments = self.comments.lock().unwrap();
        if let Some(comment) = comments.iter_mut().find(|c| c.id == id) {
            match reaction {
                Reaction::Like => comment.likes += 1,
                Reaction::Dislike => comment.dislikes += 1,
            }
        }
        Box::pin(future::ready(Ok(())))
    }
}

struct FixedCity(Option<&'static str>);

impl CityLocator for FixedCity {
    fn locate(&self) -> BoxFuture<'static, Result<Option<String>, LookupError>> {
        Box::pin(future::ready(Ok(self.0.map(str::to_string))))
    }
}

/// Translator backed by a canned response body.
struct CannedTranslator(&'static str);

impl Translator for CannedTranslator {
    fn translate(&self, _text: String) -> BoxFuture<'static, Result<String, TranslationError>> {
        Box::pin(future::ready(parse_translation(self.0)))
    }
}

fn comment(id: &str, text: &str, likes: u64) -> Comment {
    Comment {
        id: CommentId::new(id),
        text: text.to_string(),
        city: "Paris".to_string(),
        likes,
        dislikes: 0,
    }
}

fn services(api: &Arc<MemoryApi>, translation_body: &'static str) -> Services {
    Services::new(
        Some(api.clone() as Arc<dyn CommentApi>),
        Arc::new(FixedCity(Some("Lyon"))),
        Arc::new(CannedTranslator(translation_body)),
    )
}

async fn start(board: &mut Board, services: &Services) -> Vec<Effect> {
    let mut effects = Vec::new();
    for request in board.startup() {
        let outcome = flow::run(services.clone(), request).await;
        effects.extend(board.apply(outcome));
    }
    effects
}

#[tokio::test]
async fn startup_loads_comments_and_city() {
    let api = MemoryApi::with(vec![comment("1", "hello", 0), comment("2", "bonjour", 3)]);
    let services = services(&api, "[]");
    let mut board = Board::new(true);

    let effects = start(&mut board, &services).await;

    assert!(effects.is_empty());
    assert_eq!(board.comments().len(), 2);
    assert_eq!(board.comments()[1].text, "bonjour");
    assert_eq!(board.city().map(|c| c.as_str()), Some("Lyon"));
    assert_eq!(api.sent(), vec![Sent::List]);
}

#[tokio::test]
async fn like_posts_then_refreshes() {
    let api = MemoryApi::with(vec![comment("1", "hello", 4)]);
    let services = services(&api, "[]");
    let mut board = Board::new(true);
    start(&mut board, &services).await;

    let request = board
        .react(CommentId::new("1"), Reaction::Like)
        .expect("api is configured");
    let effects = board.apply(flow::run(services.clone(), request).await);

    assert_eq!(
        api.sent(),
        vec![
            Sent::List,
            Sent::React(CommentId::new("1"), Reaction::Like),
            Sent::List
        ]
    );
    assert_eq!(board.comments()[0].likes, 5);
    assert_eq!(effects, vec![Effect::Burst(Symbol::Star)]);
}

#[tokio::test]
async fn dislike_plays_sad_burst() {
    let api = MemoryApi::with(vec![comment("1", "meh", 0)]);
    let services = services(&api, "[]");
    let mut board = Board::new(true);
    start(&mut board, &services).await;

    let request = board
        .react(CommentId::new("1"), Reaction::Dislike)
        .expect("api is configured");
    let effects = board.apply(flow::run(services.clone(), request).await);

    assert_eq!(board.comments()[0].dislikes, 1);
    assert_eq!(effects, vec![Effect::Burst(Symbol::Sad)]);
}

#[tokio::test]
async fn submission_carries_detected_city_and_clears_draft() {
    let api = MemoryApi::with(Vec::new());
    let services = services(&api, "[]");
    let mut board = Board::new(true);
    start(&mut board, &services).await;

    board.edit_draft("Nice place".to_string());
    let request = board.submit().expect("draft is not blank");
    let effects = board.apply(flow::run(services.clone(), request).await);

    assert_eq!(board.draft(), "");
    assert_eq!(board.comments().len(), 1);
    assert_eq!(board.comments()[0].city, "Lyon");
    assert_eq!(effects, vec![Effect::Burst(Symbol::Star)]);
    assert!(matches!(api.sent().last(), Some(Sent::List)));
}

#[test]
fn whitespace_draft_makes_no_calls() {
    let mut board = Board::new(true);
    board.edit_draft("   \n ".to_string());

    assert!(!board.can_submit());
    assert!(board.submit().is_none());
}

#[tokio::test]
async fn failed_submission_keeps_draft_and_still_refreshes() {
    let api = MemoryApi::failing();
    let services = services(&api, "[]");
    let mut board = Board::new(true);
    board.edit_draft("first!".to_string());

    let request = board.submit().expect("draft is not blank");
    let effects = board.apply(flow::run(services.clone(), request).await);

    assert_eq!(board.draft(), "first!");
    assert!(matches!(api.sent().as_slice(), [Sent::Create(_), Sent::List]));
    assert!(effects.iter().all(|e| !matches!(e, Effect::Burst(_))));
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::Report(report)
            if report.level == ReportLevel::Error && report.call == RemoteCall::CreateComment
    )));
    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::Notify(notice) if notice.kind == NoticeKind::Error)));
}

#[tokio::test]
async fn translation_shows_first_segment() {
    let api = MemoryApi::with(vec![comment("1", "Bonjour", 0)]);
    let services = services(&api, r#"[[["Good morning","Bonjour",null,null,10]],null,"fr"]"#);
    let mut board = Board::new(true);
    start(&mut board, &services).await;

    let request = board.translate(&CommentId::new("1")).expect("comment shown");
    let effects = board.apply(flow::run(services.clone(), request).await);

    let [Effect::Notify(notice)] = effects.as_slice() else {
        panic!("expected a single notice, got {effects:?}");
    };
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(
        notice.args,
        vec![("text".to_string(), "Good morning".to_string())]
    );
}

#[tokio::test]
async fn malformed_translation_gives_failure_notice() {
    let api = MemoryApi::with(vec![comment("1", "Hola", 0)]);
    let services = services(&api, r#"{"error": "quota"}"#);
    let mut board = Board::new(true);
    start(&mut board, &services).await;

    let request = board.translate(&CommentId::new("1")).expect("comment shown");
    let effects = board.apply(flow::run(services.clone(), request).await);

    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::Notify(notice)
            if notice.kind == NoticeKind::Error
                && notice.message_key == "notification-translation-failed"
    )));
    // Only the start-up list call went to the comment service.
    assert_eq!(api.sent(), vec![Sent::List]);
}

#[tokio::test]
async fn board_without_api_only_locates_city() {
    let services = Services::new(
        None,
        Arc::new(FixedCity(None)),
        Arc::new(CannedTranslator("[]")),
    );
    let mut board = Board::new(services.has_comment_api());

    let effects = start(&mut board, &services).await;

    assert!(effects.is_empty());
    assert!(board.comments().is_empty());
    assert!(board.city().is_some_and(|c| c.is_unknown()));
    assert!(board.refresh().is_none());
    assert!(board.react(CommentId::new("1"), Reaction::Like).is_none());
}

#[test]
fn city_lookup_body_is_parsed() {
    assert_eq!(
        parse_city(r#"{"city": "Montreal", "region": "Quebec"}"#),
        Ok(Some("Montreal".to_string()))
    );
    assert_eq!(parse_city("{}"), Ok(None));
}

#[test]
fn config_file_drives_base_url_resolution() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        concat!(
            "[general]\ntheme_mode = \"dark\"\n",
            "[api]\nbase_url = \"https://comments.example.com/\"\n",
            "[services]\ntranslation_target = \"fr\"\n",
        ),
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.services.translation_target, "fr");
    assert_eq!(
        config::resolve_api_base_url(Some("https://cli.example.com/"), &loaded).as_deref(),
        Some("https://cli.example.com")
    );
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "general = [").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn catalog_interpolates_translation_text() {
    let catalog = Catalog::load();
    assert_eq!(catalog.tr("window-title"), "Comment Wall");

    let message =
        catalog.tr_with_args("notification-translation-success", &[("text", "Good morning")]);
    assert!(message.contains("Good morning"));
}
