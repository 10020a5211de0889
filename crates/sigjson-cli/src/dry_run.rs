//! Handler that validates and acknowledges requests without a messaging backend

use crate::command::{SendCommand, UpdateGroupCommand};
use crate::dispatch::RequestHandler;
use sigjson_core::{BridgeConfig, BridgeError, BridgeResult};
use std::path::Path;

pub struct DryRunHandler {
    check_files: bool,
    account: Option<String>,
}

impl DryRunHandler {
    pub fn new(check_files: bool) -> Self {
        Self {
            check_files,
            account: None,
        }
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            account: config.account.clone(),
            ..Self::new(config.check_files)
        }
    }

    fn ensure_file(&self, path: &str) -> BridgeResult<()> {
        if self.check_files && !Path::new(path).is_file() {
            return Err(BridgeError::FileNotFound(path.to_string()));
        }
        Ok(())
    }

    fn account(&self) -> &str {
        self.account.as_deref().unwrap_or("-")
    }
}

impl RequestHandler for DryRunHandler {
    fn send(&self, command: &SendCommand<'_>) -> BridgeResult<Option<String>> {
        for attachment in command.attachments {
            self.ensure_file(attachment)?;
        }

        tracing::info!(
            account = self.account(),
            recipient = %command.recipient,
            attachments = command.attachments.len(),
            body_len = command.body.map_or(0, str::len),
            "dry run: send"
        );

        Ok(Some(format!(
            "dry run: message to {} not delivered",
            command.recipient
        )))
    }

    fn update_group(&self, command: &UpdateGroupCommand<'_>) -> BridgeResult<Option<String>> {
        if let Some(avatar) = command.avatar {
            self.ensure_file(avatar)?;
        }

        let message = match command.group_id {
            Some(group_id) => format!("dry run: group {group_id} not updated"),
            None => {
                let group_id = uuid::Uuid::new_v4().simple().to_string();
                format!("dry run: group {group_id} not created")
            }
        };

        tracing::info!(
            account = self.account(),
            group_id = command.group_id.unwrap_or("(new)"),
            name = command.name.unwrap_or("-"),
            members = command.members.len(),
            "dry run: update_group"
        );

        Ok(Some(message))
    }
}
