/// D-Bus adapter - talks to `org.freedesktop.Notifications` through `zbus`.

pub mod proxy;
pub mod server;

pub use server::DbusServer;
