//! Single-block write-back cached file
//! 单块回写缓存文件

mod fill;
mod inner;
mod read;
mod seek;
mod write;

use std::{ops::Range, path::Path};

use compio_fs::File;
use inner::Inner;

use crate::{Conf, Error, Fd, ParsedConf, Result, Stats, fd::open_read_write_create};

/// File with one in-memory window and write-back on leave
/// 带单个内存窗口、离开时回写的文件
///
/// Every operation takes `&mut self` and awaits its I/O before returning,
/// nothing is flushed in the background.
/// 所有操作都取 `&mut self` 并在返回前等待 I/O 完成，没有后台刷盘。
pub struct CachedFile<F: Fd = File> {
  fd: F,
  inner: Inner,
}

impl CachedFile<File> {
  /// Open or create `path` for read and write
  /// 打开或创建 `path` 用于读写
  pub async fn open(
    path: impl AsRef<Path>,
    desc: impl Into<Box<str>>,
    conf: &[Conf],
  ) -> Result<Self> {
    let path = path.as_ref();
    let fd = open_read_write_create(path)
      .await
      .map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
      })?;
    let file = Self::from_fd(fd, desc, conf).await?;
    log::trace!("{} opened {}", file.inner, path.display());
    Ok(file)
  }
}

impl<F: Fd> CachedFile<F> {
  /// Wrap an open descriptor, it is closed again if the buffer cannot be allocated
  /// 包装已打开的描述符，缓冲区分配失败时会关闭它
  pub async fn from_fd(fd: F, desc: impl Into<Box<str>>, conf: &[Conf]) -> Result<Self> {
    let cap = ParsedConf::new(conf).cache_size;
    let mut buf = Vec::new();
    if let Err(source) = buf.try_reserve_exact(cap) {
      if let Err(e) = fd.close().await {
        log::warn!("close after alloc failure: {e}");
      }
      return Err(Error::Alloc { size: cap, source });
    }
    buf.resize(cap, 0);
    let inner = Inner::new(buf, desc.into());
    inner.check();
    Ok(Self { fd, inner })
  }

  /// Logical cursor
  /// 逻辑游标
  #[inline(always)]
  pub fn pos(&self) -> u64 {
    self.inner.win.cur
  }

  /// File range currently held in memory
  /// 当前在内存中的文件范围
  #[inline(always)]
  pub fn window(&self) -> Range<u64> {
    self.inner.win.range()
  }

  #[inline(always)]
  pub fn is_dirty(&self) -> bool {
    self.inner.dirty
  }

  #[inline(always)]
  pub fn desc(&self) -> &str {
    &self.inner.desc
  }

  #[inline(always)]
  pub fn stats(&self) -> Stats {
    self.inner.stats
  }

  #[inline(always)]
  pub fn cache_size(&self) -> usize {
    self.inner.cap()
  }

  /// On-disk size, unflushed growth is not counted
  /// 磁盘上的大小，不含未刷盘的增长
  pub async fn filesize(&self) -> Result<u64> {
    self.inner.check();
    let stat = self.fd.stat().await?;
    if !stat.regular {
      return Err(Error::NotRegular);
    }
    log::trace!("{} filesize {}", self.inner, stat.len);
    Ok(stat.len)
  }

  /// Flush then fsync
  /// 刷盘后 fsync
  pub async fn sync(&mut self) -> Result<()> {
    self.flush().await?;
    self.fd.sync_all().await?;
    Ok(())
  }

  /// Flush then release descriptor and buffer.
  /// The handle is gone whatever the outcome.
  /// 刷盘后释放描述符和缓冲区。无论成败句柄都不再可用。
  pub async fn close(mut self) -> Result<()> {
    self.inner.check();
    let s = self.inner.stats;
    log::info!(
      "stats: {{desc: {}, read_calls: {}, write_calls: {}, seeks: {}, disk_reads: {}, disk_writes: {}}}",
      self.inner.desc,
      s.read_calls,
      s.write_calls,
      s.seeks,
      s.disk_reads,
      s.disk_writes
    );
    self.flush().await?;
    let Self { fd, inner } = self;
    drop(inner);
    fd.close().await?;
    Ok(())
  }
}
