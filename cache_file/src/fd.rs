//! Unbuffered descriptor capability
//! 无缓冲描述符能力

use std::{future::Future, io, path::Path};

use compio::{
  BufResult,
  buf::{IntoInner, IoBuf},
  io::{AsyncReadAt, AsyncWriteAt},
};
use compio_fs::File;

/// Metadata needed by filesize
/// filesize 所需的元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
  pub len: u64,
  pub regular: bool,
}

/// Positioned, unbuffered file primitives.
/// Buffers are owned and handed back in `BufResult`, compio style.
/// 定位、无缓冲的文件原语。缓冲区按 compio 风格传入所有权并随 `BufResult` 返回。
pub trait Fd: Sized {
  /// Read at most `len` bytes at `pos` into `buf[..len]`, 0 means end of file
  /// 在 `pos` 处最多读取 `len` 字节到 `buf[..len]`，0 表示文件结束
  fn pread(
    &self,
    buf: Vec<u8>,
    len: usize,
    pos: u64,
  ) -> impl Future<Output = BufResult<usize, Vec<u8>>>;

  /// Single write of `buf[..len]` at `pos`, may transfer fewer bytes
  /// 在 `pos` 处单次写入 `buf[..len]`，可能少写
  fn pwrite(
    &mut self,
    buf: Vec<u8>,
    len: usize,
    pos: u64,
  ) -> impl Future<Output = BufResult<usize, Vec<u8>>>;

  fn stat(&self) -> impl Future<Output = io::Result<Stat>>;

  fn sync_all(&self) -> impl Future<Output = io::Result<()>>;

  fn close(self) -> impl Future<Output = io::Result<()>>;
}

impl Fd for File {
  async fn pread(&self, buf: Vec<u8>, len: usize, pos: u64) -> BufResult<usize, Vec<u8>> {
    let BufResult(res, slice) = AsyncReadAt::read_at(self, buf.slice(0..len), pos).await;
    BufResult(res, slice.into_inner())
  }

  async fn pwrite(&mut self, buf: Vec<u8>, len: usize, pos: u64) -> BufResult<usize, Vec<u8>> {
    let BufResult(res, slice) = AsyncWriteAt::write_at(self, buf.slice(0..len), pos).await;
    BufResult(res, slice.into_inner())
  }

  async fn stat(&self) -> io::Result<Stat> {
    let meta = File::metadata(self).await?;
    Ok(Stat {
      len: meta.len(),
      regular: meta.is_file(),
    })
  }

  async fn sync_all(&self) -> io::Result<()> {
    File::sync_all(self).await
  }

  async fn close(self) -> io::Result<()> {
    File::close(self).await
  }
}

/// Open file for reading and writing, create if not exists
/// 打开文件进行读写，不存在则创建
#[inline]
pub async fn open_read_write_create(path: impl AsRef<Path>) -> io::Result<File> {
  compio_fs::OpenOptions::new()
    .read(true)
    .write(true)
    .create(true)
    .open(path)
    .await
}
