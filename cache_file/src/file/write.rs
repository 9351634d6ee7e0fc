//! Cached write and writec
//! 缓存写入与 writec

use super::CachedFile;
use crate::{Fd, Result};

impl<F: Fd> CachedFile<F> {
  /// Write all of `data` at the cursor, return `data.len()`.
  /// When the buffer is full it is flushed and the next block is loaded,
  /// so partial overwrites keep the bytes around them.
  /// 在游标处写入全部 `data`，返回 `data.len()`。
  /// 缓冲区写满时刷盘并加载下一块，部分覆盖会保留周围字节。
  pub async fn write(&mut self, data: &[u8]) -> Result<usize> {
    self.inner.check();
    self.inner.stats.write_calls += 1;
    if data.is_empty() {
      return Ok(0);
    }

    let mut total = 0;
    while total < data.len() {
      let room = self.inner.win.room(self.inner.cap());
      if room == 0 {
        self.flush().await?;
        // Empty window at end, grows by whatever the disk still holds there
        // 空窗口位于 end，按磁盘上剩余内容增长
        let end = self.inner.win.end;
        let n = self.refill(end).await?;
        self.inner.win.grow(n);
        continue;
      }

      let n = room.min(data.len() - total);
      let off = self.inner.win.off();
      self.inner.buf[off..off + n].copy_from_slice(&data[total..total + n]);
      self.inner.win.advance(n);
      self.inner.dirty = true;
      total += n;
    }

    log::trace!("{} wrote {total}", self.inner);
    Ok(total)
  }

  /// Write one byte and return it
  /// 写入一个字节并返回
  pub async fn writec(&mut self, c: u8) -> Result<u8> {
    self.write(&[c]).await?;
    Ok(c)
  }
}
