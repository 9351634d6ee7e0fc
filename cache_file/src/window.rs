//! File range mirrored in the buffer
//! 缓冲区映射的文件范围

use std::ops::Range;

use crate::consts::MIN_CACHE_SIZE;

/// `[start, end)` is held in `buf[..end - start]`, `cur` is the cursor.
/// Always `start <= cur <= end` and `end - start <= cap`.
/// `[start, end)` 存于 `buf[..end - start]`，`cur` 为游标。
/// 始终满足 `start <= cur <= end` 且 `end - start <= cap`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Window {
  pub(crate) start: u64,
  pub(crate) cur: u64,
  pub(crate) end: u64,
}

impl Window {
  #[inline(always)]
  pub(crate) fn check(&self, cap: usize) {
    debug_assert!(cap >= MIN_CACHE_SIZE, "cache size {cap} below minimum");
    debug_assert!(self.start <= self.cur, "start {} > cur {}", self.start, self.cur);
    debug_assert!(self.cur <= self.end, "cur {} > end {}", self.cur, self.end);
    debug_assert!(
      self.end - self.start <= cap as u64,
      "window {}..{} wider than {cap}",
      self.start,
      self.end
    );
  }

  /// Cursor offset inside the buffer
  /// 游标在缓冲区内的偏移
  #[inline(always)]
  pub(crate) fn off(&self) -> usize {
    (self.cur - self.start) as usize
  }

  #[inline(always)]
  pub(crate) fn len(&self) -> usize {
    (self.end - self.start) as usize
  }

  /// Bytes readable from the cursor without refill
  /// 无需回填即可从游标读取的字节数
  #[inline(always)]
  pub(crate) fn available(&self) -> usize {
    (self.end - self.cur) as usize
  }

  /// Bytes writable from the cursor before rollover
  /// 翻转前可从游标写入的字节数
  #[inline(always)]
  pub(crate) fn room(&self, cap: usize) -> usize {
    cap - self.off()
  }

  /// `end` itself counts, a cursor there reads or appends next
  /// `end` 本身也算在内，游标在此处可继续读或追加
  #[inline(always)]
  pub(crate) fn contains(&self, pos: u64) -> bool {
    self.start <= pos && pos <= self.end
  }

  /// Empty window at the current end
  /// 在当前 end 处置为空窗口
  #[inline(always)]
  pub(crate) fn collapse(&mut self) {
    self.start = self.end;
    self.cur = self.end;
  }

  #[inline(always)]
  pub(crate) fn reset(&mut self, pos: u64, n: usize) {
    self.start = pos;
    self.cur = pos;
    self.end = pos + n as u64;
  }

  #[inline(always)]
  pub(crate) fn grow(&mut self, n: usize) {
    self.end += n as u64;
  }

  /// Move the cursor, appends push `end` along
  /// 移动游标，追加时 `end` 随之前移
  #[inline(always)]
  pub(crate) fn advance(&mut self, n: usize) {
    self.cur += n as u64;
    if self.cur > self.end {
      self.end = self.cur;
    }
  }

  #[inline(always)]
  pub(crate) fn range(&self) -> Range<u64> {
    self.start..self.end
  }
}
