use std::sync::Arc;

use crate::builtins::CommandItem;
use crate::commands::{Arg, CommandExecutor, CommandSettings, ParamKind, PermissionStore};

pub const GRANT_PERMISSION: &str = "permissions.grant";

/// Grants a permission to a user id at runtime
pub struct GrantCommand {
    permissions: Arc<PermissionStore>,
}

impl GrantCommand {
    pub fn new(permissions: Arc<PermissionStore>) -> CommandItem {
        CommandItem::GrantCommand(Self { permissions })
    }

    pub fn settings(prefix: &str) -> CommandSettings {
        CommandSettings::new(&[format!("{}grant", prefix)])
            .description("Grants a permission to a user")
            .usage("<user-id> <permission>")
            .required_permission(GRANT_PERMISSION)
    }
}

impl CommandExecutor for GrantCommand {
    fn parameters(&self) -> Vec<ParamKind> {
        vec![ParamKind::Command, ParamKind::Args]
    }

    fn execute(&self, args: Vec<Arg>) -> anyhow::Result<Option<String>> {
        let command = args.first().and_then(Arg::as_command).unwrap_or_default();
        let rest = args.get(1).and_then(Arg::as_args).unwrap_or(&[]);

        match rest {
            [user_id, permission] => {
                self.permissions.grant(user_id, permission);
                log::info!("Granted '{}' to user {}", permission, user_id);

                Ok(Option::Some(format!("Granted '{}' to {}", permission, user_id)))
            },
            _ => Ok(Option::Some(format!("Usage: {} <user-id> <permission>", command))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::GrantCommand;
    use crate::commands::{Arg, CommandExecutor, PermissionStore};

    fn args(command: &str, rest: &[&str]) -> Vec<Arg> {
        vec![
            Arg::Command(command.to_string()),
            Arg::Args(rest.iter().map(|s| s.to_string()).collect()),
        ]
    }

    #[test]
    fn grants_to_user() {
        let permissions = Arc::new(PermissionStore::new());
        let command = GrantCommand::new(permissions.clone());

        let reply = command.execute(args("~grant", &["40286300", "admin"])).unwrap();

        assert_eq!(reply, Option::Some("Granted 'admin' to 40286300".to_string()));
        assert!(permissions.has_permission("40286300", "admin"));
    }

    #[test]
    fn explains_usage_on_bad_input() {
        let permissions = Arc::new(PermissionStore::new());
        let command = GrantCommand::new(permissions.clone());

        let reply = command.execute(args("~grant", &["40286300"])).unwrap();

        assert_eq!(reply, Option::Some("Usage: ~grant <user-id> <permission>".to_string()));
        assert!(permissions.permissions_of("40286300").is_empty());
    }
}
