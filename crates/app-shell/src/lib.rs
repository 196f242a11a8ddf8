//! Root view of the Tokens app.
//!
//! [`AppShell`] installs a client-side navigation context, matches the current
//! location against its route table and renders the routed content view above
//! an unconditional footer.

mod console;

pub mod error;
pub mod location;
pub mod navigation;
pub mod route;
pub mod shell;
pub mod views;

pub use error::{NavigationError, RouteError};
pub use location::Location;
pub use navigation::Navigation;
pub use route::{Params, PathPattern, RouteMatch, RouteTable};
pub use shell::{AppShell, Route, ShellTree};
pub use views::View;

pub use zoon;
