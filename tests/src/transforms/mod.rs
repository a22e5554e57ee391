mod constants;
mod control_flow;
mod dead_code;
mod opaque_predicate;
mod rename;
