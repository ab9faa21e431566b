mod macros;

mod fundamentals;
mod history;
mod news;

pub(crate) use macros::vetrina_router_method;
