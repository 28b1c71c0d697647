//! CLI command implementations.

pub(crate) mod blocks;
pub(crate) mod decorate;
pub(crate) mod resolve;

pub(crate) use blocks::BlocksArgs;
pub(crate) use decorate::DecorateArgs;
pub(crate) use resolve::ResolveArgs;
