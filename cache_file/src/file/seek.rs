//! Cursor positioning
//! 游标定位

use super::CachedFile;
use crate::{Fd, Result};

impl<F: Fd> CachedFile<F> {
  /// Move the cursor to absolute `pos`, return it.
  /// Inside `[start, end]` this is free, elsewhere the window is flushed
  /// and reloaded at `pos`.
  /// 将游标移到绝对位置 `pos` 并返回。在 `[start, end]` 内无 I/O，
  /// 否则刷盘并在 `pos` 处重新加载窗口。
  pub async fn seek(&mut self, pos: u64) -> Result<u64> {
    self.inner.check();
    self.inner.stats.seeks += 1;

    if self.inner.win.contains(pos) {
      self.inner.win.cur = pos;
      log::trace!("{} seek in window", self.inner);
      return Ok(pos);
    }

    self.flush().await?;
    let n = self.refill(pos).await?;
    self.inner.win.reset(pos, n);
    log::trace!("{} seek reload", self.inner);
    Ok(pos)
  }
}
