pub mod update;
pub mod util;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Message {
    /// Quit application
    Quit,
    /// Re-render the table from the inventory
    Refresh,
    /// Move one line up
    MoveUp,
    /// Move one line down
    MoveDown,
    /// Move cursor to the first line
    MoveToTop,
    /// Move cursor to the last line
    MoveToBottom,
    /// Toggle the section whose header is under the cursor
    ToggleSection,
    /// Activate the "add" control of the section under the cursor
    NewInSection,
    /// Mouse click at absolute terminal coordinates
    Click { column: u16, row: u16 },
    /// Append a new item to the named category
    AddItem(String),
    /// Dismiss the toast notification
    DismissToast,
}
