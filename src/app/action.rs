/// Side effects the handler asks the main loop to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Ring the terminal bell.
    Bell,
}
