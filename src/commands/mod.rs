pub mod arguments;
pub mod core;
pub mod dispatcher;
pub mod invoker;
pub mod permissions;
pub mod registry;

pub use self::core::{Arg, CommandDescriptor, CommandExecutor, CommandSettings, FnCommand, ParamKind};
pub use self::dispatcher::{Dispatch, Dispatcher, IgnoreReason};
pub use self::permissions::PermissionStore;
pub use self::registry::{CommandRegistry, RegistryError};
