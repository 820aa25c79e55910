pub mod pack;
pub mod size;
pub mod unpack;

/// Represents a command in the bitline application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
