//! Cached read and readc
//! 缓存读取与 readc

use super::CachedFile;
use crate::{Fd, Result};

impl<F: Fd> CachedFile<F> {
  /// Read up to `out.len()` bytes at the cursor.
  /// Fewer bytes means end of file, which is not an error.
  /// 从游标处读取至多 `out.len()` 字节。少于请求表示文件结束，不是错误。
  pub async fn read(&mut self, out: &mut [u8]) -> Result<usize> {
    self.inner.check();
    self.inner.stats.read_calls += 1;
    if out.is_empty() {
      return Ok(0);
    }

    let mut total = 0;
    while total < out.len() {
      let available = self.inner.win.available();
      if available == 0 {
        self.flush().await?;
        let end = self.inner.win.end;
        let n = self.refill(end).await?;
        if n == 0 {
          break;
        }
        self.inner.win.grow(n);
        continue;
      }

      let n = available.min(out.len() - total);
      let off = self.inner.win.off();
      out[total..total + n].copy_from_slice(&self.inner.buf[off..off + n]);
      self.inner.win.advance(n);
      total += n;
    }

    log::trace!("{} read {total}/{}", self.inner, out.len());
    Ok(total)
  }

  /// One byte, `None` at end of file
  /// 读取一个字节，文件结束时为 `None`
  pub async fn readc(&mut self) -> Result<Option<u8>> {
    let mut c = [0u8; 1];
    Ok(match self.read(&mut c).await? {
      0 => None,
      _ => Some(c[0]),
    })
  }
}
