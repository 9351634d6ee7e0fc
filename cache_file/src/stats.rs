//! Call counters, observability only
//! 调用计数，仅用于观测

/// Counters kept by CachedFile
/// CachedFile 维护的计数器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
  /// read() calls / read() 调用次数
  pub read_calls: u64,
  /// write() calls / write() 调用次数
  pub write_calls: u64,
  /// seek() calls / seek() 调用次数
  pub seeks: u64,
  /// Positioned reads issued by refill / 回填发出的定位读
  pub disk_reads: u64,
  /// Positioned writes issued by flush / 刷盘发出的定位写
  pub disk_writes: u64,
}
