pub type CmdResult<T> = debug_guard::Result<(T, i32)>;

pub mod wrap;
