//! Buffer state for CachedFile
//! CachedFile 缓冲状态

use std::fmt;

use crate::{Stats, window::Window};

pub(super) struct Inner {
  /// Fixed length, `buf.len()` is the cache size
  /// 长度固定，`buf.len()` 即缓存大小
  pub(super) buf: Vec<u8>,
  pub(super) win: Window,
  pub(super) dirty: bool,
  pub(super) desc: Box<str>,
  pub(super) stats: Stats,
}

impl Inner {
  pub(super) fn new(buf: Vec<u8>, desc: Box<str>) -> Self {
    Self {
      buf,
      win: Window::default(),
      dirty: false,
      desc,
      stats: Stats::default(),
    }
  }

  #[inline(always)]
  pub(super) fn cap(&self) -> usize {
    self.buf.len()
  }

  #[inline(always)]
  pub(super) fn check(&self) {
    self.win.check(self.cap());
    debug_assert!(!self.dirty || self.win.len() > 0, "dirty empty window");
  }
}

impl fmt::Display for Inner {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{{desc: {}, start: {}, cur: {}, end: {}, dirty: {}}}",
      self.desc, self.win.start, self.win.cur, self.win.end, self.dirty
    )
  }
}

impl Drop for Inner {
  #[cold]
  fn drop(&mut self) {
    if self.dirty {
      log::warn!("CachedFile {} dropped with unflushed writes", self.desc);
    }
  }
}
