pub mod filter;
pub mod label;
pub mod registry;
pub mod selection;
pub mod server;

pub use label::{Alphabet, AlphabetError, AlphabetPreset, Label, LabelAllocator};
pub use registry::{Switch, SwitchRegistry};
pub use selection::{Activation, ActivationPath, Decision, FocusState, SelectionPolicy};
pub use server::{WindowData, WindowId, WindowManagerSnapshot, WorkspaceId};
