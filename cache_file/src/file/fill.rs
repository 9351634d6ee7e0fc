//! Flush and refill, the only paths that touch the descriptor data
//! 刷盘与回填，唯一访问描述符数据的路径

use std::mem;

use compio::BufResult;

use super::CachedFile;
use crate::{Error, Fd, Result};

impl<F: Fd> CachedFile<F> {
  /// Write the window back if dirty, then leave it empty at `end`.
  /// The cursor moves to `end` too, even when it sat earlier in the window.
  /// A short write fails and keeps the window and cursor as they were.
  /// 若为脏则回写窗口，之后在 `end` 处置空。
  /// 游标同样移到 `end`，即使它原本位于窗口中间。
  /// 少写视为失败，窗口与游标保持原样。
  pub async fn flush(&mut self) -> Result<()> {
    self.inner.check();
    let i = &mut self.inner;
    if i.dirty {
      let pos = i.win.start;
      let len = i.win.len();
      let buf = mem::take(&mut i.buf);
      let BufResult(res, buf) = self.fd.pwrite(buf, len, pos).await;
      i.buf = buf;
      i.stats.disk_writes += 1;
      let written = res?;
      if written != len {
        return Err(Error::ShortWrite { pos, len, written });
      }
      log::debug!("{i} flushed {len} at {pos}");
    }
    i.win.collapse();
    i.dirty = false;
    Ok(())
  }

  /// Load up to a full buffer at `pos` into `buf[0..]`, return bytes read
  /// 在 `pos` 处读取至多一整个缓冲区到 `buf[0..]`，返回读取的字节数
  pub(super) async fn refill(&mut self, pos: u64) -> Result<usize> {
    let i = &mut self.inner;
    debug_assert!(!i.dirty, "refill over dirty window");
    let cap = i.cap();
    let buf = mem::take(&mut i.buf);
    let BufResult(res, buf) = self.fd.pread(buf, cap, pos).await;
    i.buf = buf;
    i.stats.disk_reads += 1;
    let n = res?;
    debug_assert!(n <= cap, "read {n} past buffer {cap}");
    log::debug!("{i} refilled {n} at {pos}");
    Ok(n)
  }
}
