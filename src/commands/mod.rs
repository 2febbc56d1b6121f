pub mod add;
pub mod branches;
pub mod clean;
pub mod config;
pub mod context;
pub mod edit;
pub mod list;
pub mod refresh;
pub mod remove;
pub mod settings;
pub mod status;
pub mod watch;

pub use add::*;
pub use branches::*;
pub use clean::*;
pub use config::*;
pub use context::*;
pub use edit::*;
pub use list::*;
pub use refresh::*;
pub use remove::*;
pub use settings::*;
pub use status::*;
pub use watch::*;
