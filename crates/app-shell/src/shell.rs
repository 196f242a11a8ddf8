use std::rc::Rc;

use zoon::*;

use crate::console;
use crate::error::RouteError;
use crate::location::Location;
use crate::navigation::Navigation;
use crate::route::RouteTable;
use crate::views::View;

/// CSS class of the shell's root element.
pub const ROOT_CLASS: &str = "App";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Tokens,
}

impl Route {
    pub fn view(self) -> View {
        match self {
            Self::Tokens => View::Tokens,
        }
    }
}

/// The application's route table: `/` renders the token view.
pub fn app_routes() -> Result<RouteTable<Route>, RouteError> {
    RouteTable::new().with_route("/", Route::Tokens)
}

/// Views the shell renders for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellTree {
    /// Routed slot, `None` when no route matches.
    pub content: Option<View>,
    pub footer: View,
}

impl ShellTree {
    pub fn views(&self) -> impl Iterator<Item = View> + '_ {
        self.content.iter().copied().chain([self.footer])
    }

    pub fn contains(&self, view: View) -> bool {
        self.views().any(|rendered| rendered == view)
    }
}

/// Root view: navigation boundary, routed content slot and footer.
#[derive(Clone)]
pub struct AppShell {
    routes: Rc<RouteTable<Route>>,
    navigation: Navigation,
}

impl AppShell {
    /// Installs browser navigation for the page and builds the root element.
    pub fn new() -> impl Element {
        Self::with_navigation(Navigation::browser().install()).root()
    }

    pub fn with_navigation(navigation: Navigation) -> Self {
        let routes = app_routes().unwrap_or_else(|error| {
            console::error(format_args!("Invalid route table: {error}"));
            RouteTable::new()
        });
        Self {
            routes: Rc::new(routes),
            navigation,
        }
    }

    pub fn route_table(&self) -> &RouteTable<Route> {
        &self.routes
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn compose(&self, location: &Location) -> ShellTree {
        ShellTree {
            content: self
                .routes
                .match_location(location)
                .map(|route_match| route_match.route.view()),
            footer: View::Footer,
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .update_raw_el(|raw_el| raw_el.class(ROOT_CLASS))
            .item(self.content_slot())
            .item(View::Footer.render())
    }

    fn content_slot(&self) -> impl Element + use<> {
        El::new()
            .s(Width::fill())
            .s(Height::fill())
            .child_signal(self.navigation.location_signal().map({
                let this = self.clone();
                move |location| this.compose(&location).content.map(View::render)
            }))
    }
}
