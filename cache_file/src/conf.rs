//! Cache configuration
//! 缓存配置

use crate::consts::{CACHE_SIZE, MIN_CACHE_SIZE};

/// Cache configuration
/// 缓存配置
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Buffer size in bytes, clamped to MIN_CACHE_SIZE
  /// 缓冲区字节数，最小为 MIN_CACHE_SIZE
  CacheSize(usize),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedConf {
  pub cache_size: usize,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      cache_size: CACHE_SIZE,
    }
  }
}

impl ParsedConf {
  pub fn new(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for item in conf {
      match *item {
        Conf::CacheSize(v) => c.cache_size = v.max(MIN_CACHE_SIZE),
      }
    }
    c
  }
}
