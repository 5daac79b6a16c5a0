// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the board, the remote services, the feedback layer,
//! the toast manager and the diagnostics collector together, and translates
//! messages into board transitions and background tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::board::Board;
use crate::application::flow::Services;
use crate::application::port::{CityLocator, CommentApi, Translator};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, WarningEvent, WarningType};
use crate::infrastructure::http::{self, GoogleTranslator, IpApiLocator, RestCommentApi};
use crate::strings::Catalog;
use crate::ui::feedback::FeedbackLayer;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    catalog: Catalog,
    board: Board,
    services: Services,
    theme_mode: ThemeMode,
    /// Star/sad bursts drawn over the wall.
    feedback: FeedbackLayer,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Directory receiving exported diagnostics reports.
    data_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("comments", &self.board.comments().len())
            .field("api_configured", &self.board.is_api_configured())
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Wires the HTTP adapters behind the ports.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialized.
pub fn build_services(
    config: &config::Config,
    api_base_url: Option<String>,
) -> crate::error::Result<Services> {
    let client = http::build_client()?;

    let comments = api_base_url
        .map(|url| Arc::new(RestCommentApi::new(client.clone(), url)) as Arc<dyn CommentApi>);
    let locator: Arc<dyn CityLocator> = Arc::new(IpApiLocator::new(
        client.clone(),
        config.services.geolocation_url.clone(),
    ));
    let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::new(
        client,
        config.services.translation_url.clone(),
        config.services.translation_target.clone(),
    ));

    Ok(Services::new(comments, locator, translator))
}

/// Everything `App::new` needs, prepared before the event loop starts.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    pub config: config::Config,
    pub config_warning: Option<String>,
    pub services: Services,
}

impl Bootstrap {
    /// Loads the configuration and builds the services.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn prepare(flags: &Flags) -> crate::error::Result<Self> {
        let (config, config_warning) = config::load();
        let api_base_url = config::resolve_api_base_url(flags.api_url.as_deref(), &config);
        let services = build_services(&config, api_base_url)?;
        Ok(Self {
            config,
            config_warning,
            services,
        })
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if the Iced runtime fails to start.
pub fn run(bootstrap: Bootstrap) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure.
    let boot = move || App::new(bootstrap.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the start-up requests
    /// (comment list and city lookup, concurrently).
    pub fn new(bootstrap: Bootstrap) -> (Self, Task<Message>) {
        let Bootstrap {
            config,
            config_warning,
            services,
        } = bootstrap;

        let api_configured = services.has_comment_api();
        let mut app = App {
            catalog: Catalog::load(),
            board: Board::new(api_configured),
            services,
            theme_mode: config.general.theme_mode,
            feedback: FeedbackLayer::new(),
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::new(config.diagnostics.capacity()),
            data_dir: paths::get_app_data_dir(),
        };

        app.diagnostics
            .log_state(AppStateEvent::Started { api_configured });

        if let Some(key) = config_warning {
            app.diagnostics.log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                key.clone(),
            ));
            app.notifications.push(Notification::warning(key));
        }
        if !api_configured {
            app.diagnostics.log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                "comment service base URL not configured",
            ));
            app.notifications
                .push(Notification::warning("notification-api-not-configured"));
        }

        let handle = app.diagnostics.handle();
        let task = update::dispatch_all(&app.services, &handle, app.board.startup());

        (app, task)
    }

    fn title(&self) -> String {
        self.catalog.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.feedback.is_animating()),
            subscription::create_window_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            board: &mut self.board,
            services: &self.services,
            feedback: &mut self.feedback,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            data_dir: self.data_dir.as_deref(),
        };

        match message {
            Message::Wall(message) => update::handle_wall_message(&mut ctx, message),
            Message::Completed(outcome) => {
                update::handle_completed(&mut ctx, outcome, std::time::Instant::now());
                Task::none()
            }
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message, std::time::Instant::now());
                Task::none()
            }
            Message::WindowOpened(_id) => {
                update::handle_window_opened(&mut ctx);
                Task::none()
            }
            Message::Tick(now) => {
                update::handle_tick(&mut ctx, now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            board: &self.board,
            catalog: &self.catalog,
            feedback: &self.feedback,
            notifications: &self.notifications,
        })
    }
}
