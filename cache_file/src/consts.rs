//! Cache constants
//! 缓存常量

// CACHE_SIZE, generated by build.rs (env CACHE_SIZE, default 4096)
// CACHE_SIZE 由 build.rs 生成（环境变量 CACHE_SIZE，默认 4096）
include!(concat!(env!("OUT_DIR"), "/consts.rs"));

/// Smallest window the cache accepts
/// 缓存允许的最小窗口
pub const MIN_CACHE_SIZE: usize = 4;
