// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Author: tickbh
// -----
// Created Date: 2024/06/17 14:52:30

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::SystemTime;

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};

lazy_static! {
    static ref RECORDER: Recorder = Recorder::new();
}

/// 可开关的记录器, 显式构造, 显式设置目的地, 排序算法本身不依赖它
/// 新建时处于关闭状态, 打开开关后记录才会写入目的地, 每次写入后刷新
/// 错误级别的记录无论开关与否都会回显到标准错误流
///
/// # Examples
///
/// ```
/// use sortalgo::Recorder;
/// fn main() {
///     let recorder = Recorder::new();
///     recorder.open(Vec::new());
///     assert!(!recorder.is_enabled());
///     recorder.set_enabled(true);
///     recorder.record(format_args!("sorted {} elements", 5)).unwrap();
/// }
/// ```
pub struct Recorder {
    enabled: AtomicBool,
    dest: Mutex<Option<Box<dyn Write + Send>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            dest: Mutex::new(None),
        }
    }

    /// 设置记录目的地, 替换掉之前的目的地
    pub fn open<W: Write + Send + 'static>(&self, dest: W) {
        let mut guard = self.dest.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Box::new(dest));
    }

    /// 打开或关闭记录开关
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// 将一行格式化信息写入记录目的地并刷新
    /// 开关关闭或目的地未设置时不写任何内容
    pub fn record(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        let mut guard = self.dest.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(dest) = guard.as_mut() {
            writeln!(dest, "{}", args)?;
            dest.flush()?;
        }
        Ok(())
    }

    /// 在记录目的地与标准错误流里同时记录一行错误
    /// 目的地受开关控制, 标准错误流不受开关控制
    pub fn error(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.record(args)?;
        let mut err = io::stderr();
        writeln!(err, "{}", args)?;
        err.flush()
    }
}

impl Log for Recorder {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled() || metadata.level() == Level::Error
    }

    fn log(&self, record: &Record) {
        if self.is_enabled() {
            let mut guard = self.dest.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(dest) = guard.as_mut() {
                let _ = writeln!(dest, "{} [{}] {}", format_now(), record.level(), record.args());
                let _ = dest.flush();
            }
        }
        if record.level() == Level::Error {
            let mut err = io::stderr();
            let _ = writeln!(err, "{} [{}] {}", format_now(), record.level(), record.args());
            let _ = err.flush();
        }
    }

    fn flush(&self) {
        let mut guard = self.dest.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(dest) = guard.as_mut() {
            let _ = dest.flush();
        }
    }
}

/// 给进程级记录器设置目的地, 并注册为log门面的后端
/// 之后log::info!等宏的输出都会经过该记录器, 开关仍默认关闭
pub fn install<W: Write + Send + 'static>(dest: W) -> Result<(), log::SetLoggerError> {
    RECORDER.open(dest);
    log::set_logger(&*RECORDER)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// 获取进程级记录器
pub fn global() -> &'static Recorder {
    &RECORDER
}

/// 打开或关闭进程级记录器的开关
pub fn set_enabled(enabled: bool) {
    RECORDER.set_enabled(enabled);
}

pub fn is_enabled() -> bool {
    RECORDER.is_enabled()
}

/// 把当前UTC时间格式化为"%Y-%m-%d %H:%M:%S"形式
pub fn format_now() -> String {
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("ok")
        .as_secs();
    format_timestamp(secs)
}

/// 把时间戳格式化为"%Y-%m-%d %H:%M:%S"形式的UTC时间
pub fn format_timestamp(secs: u64) -> String {
    let (year, month, day) = civil_from_days(secs / 86400);
    let rem = secs % 86400;
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year,
        month,
        day,
        rem / 3600,
        rem % 3600 / 60,
        rem % 60
    )
}

// 1970-01-01起的天数转公历年月日, 按400年一个周期折算
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719468;
    let era = z / 146097;
    let doe = z % 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::{format_timestamp, Recorder};

    #[derive(Clone)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Sink {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_toggle() {
        let sink = Sink(Arc::new(Mutex::new(Vec::new())));
        let recorder = Recorder::new();
        recorder.open(sink.clone());

        recorder.record(format_args!("dropped")).unwrap();
        assert!(sink.text().is_empty());

        recorder.set_enabled(true);
        recorder.record(format_args!("kept {}", 1)).unwrap();
        assert!(sink.text().contains("kept 1"));

        recorder.set_enabled(false);
        recorder.record(format_args!("off again")).unwrap();
        assert!(!sink.text().contains("off again"));
    }

    #[test]
    fn test_no_dest() {
        let recorder = Recorder::new();
        recorder.set_enabled(true);
        recorder.record(format_args!("nowhere")).unwrap();
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(1704067199), "2023-12-31 23:59:59");
        assert_eq!(format_timestamp(1704067200), "2024-01-01 00:00:00");
        assert_eq!(format_timestamp(951825661), "2000-02-29 12:01:01");
        assert_eq!(format_timestamp(1716519851), "2024-05-24 03:04:11");
    }
}
