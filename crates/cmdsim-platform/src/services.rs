//! Platform service traits plus desktop and seeded implementations.

use std::cell::RefCell;
use std::fmt;

use cmdsim_types::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// System information service
// ---------------------------------------------------------------------------

/// One row of the synthetic process table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    /// CPU share in percent.
    pub cpu_percent: f32,
    /// Resident memory in MB.
    pub mem_mb: f32,
}

/// Physical memory figures in MB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub total_mb: u64,
    pub used_mb: u64,
}

impl MemoryInfo {
    pub fn available_mb(&self) -> u64 {
        self.total_mb.saturating_sub(self.used_mb)
    }

    /// Used share of total, in percent.
    pub fn used_percent(&self) -> f64 {
        if self.total_mb == 0 {
            return 0.0;
        }
        self.used_mb as f64 / self.total_mb as f64 * 100.0
    }
}

/// A point-in-time view of the (fake) machine.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    /// Whole-machine CPU load, 0-99.
    pub cpu_percent: u8,
    pub memory: MemoryInfo,
    pub processes: Vec<ProcessInfo>,
}

/// Source of system snapshots. Every call may return different load figures.
pub trait SystemInfoService {
    fn snapshot(&self) -> Result<SystemSnapshot>;
}

/// `(pid, image name, cpu %, memory MB)`.
const PROCESS_TABLE: [(u32, &str, f32, f32); 7] = [
    (1234, "explorer.exe", 2.1, 45.2),
    (5678, "chrome.exe", 15.3, 234.8),
    (9012, "code.exe", 8.7, 156.4),
    (3456, "python.exe", 1.2, 23.6),
    (7890, "node.exe", 4.5, 67.2),
    (2468, "cmd.exe", 0.3, 5.8),
    (1357, "notepad.exe", 0.1, 8.2),
];

/// Draw a snapshot: CPU uniformly in `0..100`, used memory between one
/// eighth and seven eighths of `total_mb`, and the fixed process table.
fn synthesize(rng: &mut impl Rng, total_mb: u64) -> SystemSnapshot {
    let floor = total_mb / 8;
    let span = (total_mb / 4 * 3).max(1);
    let used_mb = (floor + rng.gen_range(0..span)).min(total_mb);
    SystemSnapshot {
        cpu_percent: rng.gen_range(0..100),
        memory: MemoryInfo { total_mb, used_mb },
        processes: PROCESS_TABLE
            .iter()
            .map(|&(pid, name, cpu_percent, mem_mb)| ProcessInfo {
                pid,
                name: name.to_string(),
                cpu_percent,
                mem_mb,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// Weekday of a day count since 1970-01-01 (a Thursday).
    fn from_epoch_days(days: u64) -> Self {
        match (days + 4) % 7 {
            0 => Self::Sun,
            1 => Self::Mon,
            2 => Self::Tue,
            3 => Self::Wed,
            4 => Self::Thu,
            5 => Self::Fri,
            _ => Self::Sat,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sun => "Sun",
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
        };
        f.write_str(name)
    }
}

/// A broken-down UTC wall-clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub weekday: Weekday,
}

impl WallClock {
    /// Break down seconds since the Unix epoch (UTC, no leap seconds).
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = secs / 86_400;
        let time_of_day = secs % 86_400;
        let (year, month, day) = days_to_ymd(days);
        Self {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
            weekday: Weekday::from_epoch_days(days),
        }
    }

    /// `Fri 10/16/2026`.
    pub fn date_string(&self) -> String {
        format!(
            "{} {:02}/{:02}/{:04}",
            self.weekday, self.month, self.day, self.year
        )
    }

    /// `03:04:05 PM`.
    pub fn time_string(&self) -> String {
        let (hour, meridiem) = self.twelve_hour();
        format!(
            "{hour:02}:{:02}:{:02} {meridiem}",
            self.minute, self.second
        )
    }

    /// `10/16/2026  03:04 PM`, the date/time column of a `dir` file row.
    pub fn listing_stamp(&self) -> String {
        let (hour, meridiem) = self.twelve_hour();
        format!(
            "{:02}/{:02}/{:04}  {hour:02}:{:02} {meridiem}",
            self.month, self.day, self.year, self.minute
        )
    }

    fn twelve_hour(&self) -> (u8, &'static str) {
        match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        }
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over the wall clock.
pub trait TimeService {
    fn now(&self) -> Result<WallClock>;
}

// ---------------------------------------------------------------------------
// Unified platform trait
// ---------------------------------------------------------------------------

/// Everything the interpreter needs from its host.
pub trait Platform: SystemInfoService + TimeService {}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Thread RNG for load figures, host clock for time.
pub struct DesktopPlatform {
    total_memory_mb: u64,
}

impl DesktopPlatform {
    pub fn new(total_memory_mb: u64) -> Self {
        Self { total_memory_mb }
    }
}

impl SystemInfoService for DesktopPlatform {
    fn snapshot(&self) -> Result<SystemSnapshot> {
        Ok(synthesize(&mut rand::thread_rng(), self.total_memory_mb))
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<WallClock> {
        use std::time::SystemTime as StdTime;
        let secs = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Ok(WallClock::from_unix_secs(secs))
    }
}

impl Platform for DesktopPlatform {}

// ---------------------------------------------------------------------------
// Seeded implementation
// ---------------------------------------------------------------------------

/// Reproducible platform: seeded RNG and a frozen clock.
pub struct SeededPlatform {
    rng: RefCell<StdRng>,
    clock: WallClock,
    total_memory_mb: u64,
}

impl SeededPlatform {
    pub fn new(seed: u64, clock: WallClock, total_memory_mb: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
            clock,
            total_memory_mb,
        }
    }
}

impl SystemInfoService for SeededPlatform {
    fn snapshot(&self) -> Result<SystemSnapshot> {
        Ok(synthesize(&mut *self.rng.borrow_mut(), self.total_memory_mb))
    }
}

impl TimeService for SeededPlatform {
    fn now(&self) -> Result<WallClock> {
        Ok(self.clock)
    }
}

impl Platform for SeededPlatform {}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day).
fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let month_days: [u64; 12] = [
        31,
        if is_leap(year) { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 12u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    (year, month, (days + 1) as u8)
}

fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRI_2026_10_16_150405: u64 = 20_742 * 86_400 + 15 * 3600 + 4 * 60 + 5;

    #[test]
    fn epoch_is_thursday() {
        let clock = WallClock::from_unix_secs(0);
        assert_eq!((clock.year, clock.month, clock.day), (1970, 1, 1));
        assert_eq!(clock.weekday, Weekday::Thu);
    }

    #[test]
    fn known_dates() {
        assert_eq!(days_to_ymd(19_723), (2024, 1, 1));
        assert_eq!(days_to_ymd(11_016), (2000, 2, 29));
        assert_eq!(days_to_ymd(20_742), (2026, 10, 16));
        assert_eq!(Weekday::from_epoch_days(19_723), Weekday::Mon);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2026));
    }

    #[test]
    fn date_and_time_strings() {
        let clock = WallClock::from_unix_secs(FRI_2026_10_16_150405);
        assert_eq!(clock.date_string(), "Fri 10/16/2026");
        assert_eq!(clock.time_string(), "03:04:05 PM");
        assert_eq!(clock.to_string(), "2026-10-16 15:04:05");
        assert_eq!(clock.listing_stamp(), "10/16/2026  03:04 PM");
    }

    #[test]
    fn twelve_hour_edges() {
        let midnight = WallClock::from_unix_secs(20_742 * 86_400);
        assert_eq!(midnight.time_string(), "12:00:00 AM");
        let noon = WallClock::from_unix_secs(20_742 * 86_400 + 12 * 3600);
        assert_eq!(noon.time_string(), "12:00:00 PM");
        let morning = WallClock::from_unix_secs(20_742 * 86_400 + 9 * 3600 + 30 * 60);
        assert_eq!(morning.time_string(), "09:30:00 AM");
        assert_eq!(midnight.listing_stamp(), "10/16/2026  12:00 AM");
    }

    #[test]
    fn snapshot_shape() {
        let platform = DesktopPlatform::new(16_384);
        let snap = platform.snapshot().unwrap();
        assert!(snap.cpu_percent < 100);
        assert_eq!(snap.memory.total_mb, 16_384);
        assert!(snap.memory.used_mb >= 2_048 && snap.memory.used_mb < 16_384);
        assert_eq!(snap.processes.len(), 7);
        assert_eq!(snap.processes[0].name, "explorer.exe");
        assert_eq!(snap.processes[1].pid, 5678);
    }

    #[test]
    fn seeded_platform_is_reproducible() {
        let clock = WallClock::from_unix_secs(FRI_2026_10_16_150405);
        let a = SeededPlatform::new(7, clock, 16_384);
        let b = SeededPlatform::new(7, clock, 16_384);
        assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
        assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
        assert_eq!(a.now().unwrap(), clock);
    }

    #[test]
    fn memory_math() {
        let mem = MemoryInfo {
            total_mb: 16_384,
            used_mb: 4_096,
        };
        assert_eq!(mem.available_mb(), 12_288);
        assert!((mem.used_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiny_memory_does_not_overflow() {
        let mut rng = StdRng::seed_from_u64(1);
        let snap = synthesize(&mut rng, 1);
        assert!(snap.memory.used_mb <= 1);
    }

    #[test]
    fn huge_memory_does_not_overflow() {
        let mut rng = StdRng::seed_from_u64(1);
        let snap = synthesize(&mut rng, u64::MAX);
        assert_eq!(snap.memory.total_mb, u64::MAX);
        assert!(snap.memory.used_mb >= u64::MAX / 8);
    }
}
