pub mod collection;
pub mod item;

pub use collection::{Auth, Collection, Folder, Info, Variable};
pub use item::{Body, Event, HttpMethod, Item, Listen, Request, Script, Url};
