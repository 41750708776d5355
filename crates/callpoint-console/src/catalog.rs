/*
[INPUT]:  Loaded-command rows fetched for one callback.
[OUTPUT]: Name-ordered command set with exact-match lookup.
[POS]:    State layer - per-callback command catalog.
[UPDATE]: When catalog ordering or lookup semantics change.
*/

use callpoint_adapter::{CallpointClient, CallpointError, CommandDef, LoadedCommand};

/// The set of commands currently loaded on a callback.
///
/// Replaced wholesale on reload; there is no incremental mutation.
#[derive(Debug, Clone, Default)]
pub struct CommandCatalog {
    commands: Vec<CommandDef>,
}

impl CommandCatalog {
    /// An empty catalog; no tasking is possible until a reload succeeds.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fetch the loaded commands for a callback and build a catalog.
    pub async fn load(
        client: &CallpointClient,
        callback_id: i64,
    ) -> Result<Self, CallpointError> {
        let loaded = client.load_commands(callback_id).await?;
        Ok(Self::from_loaded(loaded))
    }

    /// Build a catalog from already-fetched rows.
    pub fn from_loaded(loaded: Vec<LoadedCommand>) -> Self {
        let mut commands: Vec<CommandDef> = loaded.into_iter().map(|row| row.command).collect();
        // Ascending by name for deterministic display; lookup stays exact-match
        // and does not depend on this order.
        commands.sort_by(|a, b| a.cmd.cmp(&b.cmd));
        Self { commands }
    }

    /// Exact-match lookup on the command token.
    pub fn lookup(&self, cmd: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|command| command.cmd == cmd)
    }

    /// The loaded commands in display order.
    pub fn commands(&self) -> &[CommandDef] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
