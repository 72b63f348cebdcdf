//! Process and thread introspection for the diagnostics tooling.
//!
//! The kernel-facing surface is abstracted behind [`ProcessIntrospection`]
//! so the buffer-sizing and sandbox-fallback logic stays testable with an
//! in-memory provider. Enumeration syscalls report truncation by filling
//! the whole destination, so callers grow the buffer and retry until the
//! result comes back short.

#![deny(unsafe_code)]

use thiserror::Error;

mod probe;

pub use probe::{grow_capacity, listing_capacity};

/// Process identifier, matching the platform `pid_t`.
pub type Pid = libc::pid_t;

/// Kernel thread identifier.
pub type Tid = u64;

/// Maximum thread name length, including the trailing NUL.
pub const MAX_THREAD_NAME: usize = 64;

/// Thread is swapped out.
pub const TH_FLAGS_SWAPPED: i32 = 0x1;
/// Thread is an idle thread.
pub const TH_FLAGS_IDLE: i32 = 0x2;

/// Scheduler run state of a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ThreadRunState {
    Running = 1,
    Stopped = 2,
    Waiting = 3,
    Uninterruptible = 4,
    Halted = 5,
}

impl ThreadRunState {
    /// Maps a raw `pth_run_state` value, `None` for anything unknown.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::Running),
            2 => Some(Self::Stopped),
            3 => Some(Self::Waiting),
            4 => Some(Self::Uninterruptible),
            5 => Some(Self::Halted),
            _ => None,
        }
    }
}

/// Per-thread accounting snapshot (like `struct proc_threadinfo`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadInfo {
    /// User-mode run time, nanoseconds.
    pub user_time_ns: u64,
    /// Kernel-mode run time, nanoseconds.
    pub system_time_ns: u64,
    /// Scaled CPU usage percentage.
    pub cpu_usage: i32,
    /// Scheduling policy in effect.
    pub policy: i32,
    /// Raw run state; decode with [`ThreadRunState::from_raw`].
    pub run_state: i32,
    /// Flag bits, see `TH_FLAGS_*`.
    pub flags: i32,
    /// Number of seconds the thread has been sleeping.
    pub sleep_time: i32,
    /// Current scheduling priority.
    pub cur_priority: i32,
    /// Base scheduling priority.
    pub priority: i32,
    /// Maximum scheduling priority.
    pub max_priority: i32,
    /// Thread name, empty when unnamed.
    pub name: String,
}

/// Per-process resource accounting (like `struct rusage_info_v3`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceUsage {
    pub uuid: [u8; 16],
    pub user_time_ns: u64,
    pub system_time_ns: u64,
    pub pkg_idle_wakeups: u64,
    pub interrupt_wakeups: u64,
    pub pageins: u64,
    pub wired_size: u64,
    pub resident_size: u64,
    pub phys_footprint: u64,
    pub proc_start_abstime: u64,
    pub proc_exit_abstime: u64,
    pub child_user_time_ns: u64,
    pub child_system_time_ns: u64,
    pub child_pkg_idle_wakeups: u64,
    pub child_interrupt_wakeups: u64,
    pub child_pageins: u64,
    pub child_elapsed_abstime: u64,
    pub diskio_bytes_read: u64,
    pub diskio_bytes_written: u64,
    pub cpu_time_qos_default: u64,
    pub cpu_time_qos_maintenance: u64,
    pub cpu_time_qos_background: u64,
    pub cpu_time_qos_utility: u64,
    pub cpu_time_qos_legacy: u64,
    pub cpu_time_qos_user_initiated: u64,
    pub cpu_time_qos_user_interactive: u64,
    pub billed_system_time_ns: u64,
    pub serviced_system_time_ns: u64,
}

/// Failure surfaced by an introspection provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntrospectionError {
    #[error("introspection syscall failed with errno {0}")]
    Os(i32),
    #[error("process {0} no longer exists")]
    Gone(Pid),
}

impl IntrospectionError {
    /// `true` when the failure is an access denial rather than bad input.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Os(errno) if *errno == libc::EPERM)
    }
}

/// Access to the process table and per-thread accounting.
pub trait ProcessIntrospection {
    /// Pid of the calling process.
    fn current_pid(&self) -> Pid;

    /// Every pid visible to the caller.
    fn list_all_pids(&self) -> Result<Vec<Pid>, IntrospectionError>;

    /// Accounting for one thread, `None` if the thread is gone.
    fn thread_info(&self, pid: Pid, tid: Tid) -> Result<Option<ThreadInfo>, IntrospectionError>;

    /// All thread ids of a process.
    fn list_threads(&self, pid: Pid) -> Result<Vec<Tid>, IntrospectionError>;

    /// Resource accounting for a whole process.
    fn resource_usage(&self, pid: Pid) -> Result<ResourceUsage, IntrospectionError>;

    /// Like [`list_all_pids`](Self::list_all_pids), but a sandbox that
    /// denies enumeration degrades to a listing holding only our own pid.
    fn list_all_pids_or_self(&self) -> Result<Vec<Pid>, IntrospectionError> {
        match self.list_all_pids() {
            Ok(pids) => Ok(pids),
            Err(err) if err.is_permission_denied() => Ok(vec![self.current_pid()]),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct FakeTable {
        own_pid: Pid,
        pids: Result<Vec<Pid>, IntrospectionError>,
        threads: BTreeMap<(Pid, Tid), ThreadInfo>,
    }

    impl FakeTable {
        fn new(own_pid: Pid) -> Self {
            Self {
                own_pid,
                pids: Ok(vec![own_pid]),
                threads: BTreeMap::new(),
            }
        }
    }

    impl ProcessIntrospection for FakeTable {
        fn current_pid(&self) -> Pid {
            self.own_pid
        }

        fn list_all_pids(&self) -> Result<Vec<Pid>, IntrospectionError> {
            self.pids.clone()
        }

        fn thread_info(
            &self,
            pid: Pid,
            tid: Tid,
        ) -> Result<Option<ThreadInfo>, IntrospectionError> {
            Ok(self.threads.get(&(pid, tid)).cloned())
        }

        fn list_threads(&self, pid: Pid) -> Result<Vec<Tid>, IntrospectionError> {
            Ok(self
                .threads
                .keys()
                .filter(|(p, _)| *p == pid)
                .map(|(_, t)| *t)
                .collect())
        }

        fn resource_usage(&self, _pid: Pid) -> Result<ResourceUsage, IntrospectionError> {
            Ok(ResourceUsage::default())
        }
    }

    #[test]
    fn test_run_state_mapping() {
        assert_eq!(ThreadRunState::from_raw(1), Some(ThreadRunState::Running));
        assert_eq!(ThreadRunState::from_raw(5), Some(ThreadRunState::Halted));
        assert_eq!(ThreadRunState::from_raw(0), None);
        assert_eq!(ThreadRunState::from_raw(6), None);
        assert_eq!(ThreadRunState::from_raw(-1), None);
    }

    #[test]
    fn test_permission_denied_classification() {
        assert!(IntrospectionError::Os(libc::EPERM).is_permission_denied());
        assert!(!IntrospectionError::Os(libc::ESRCH).is_permission_denied());
        assert!(!IntrospectionError::Gone(42).is_permission_denied());
    }

    #[test]
    fn test_sandbox_fallback_returns_own_pid() {
        let mut table = FakeTable::new(1234);
        table.pids = Err(IntrospectionError::Os(libc::EPERM));
        assert_eq!(table.list_all_pids_or_self().unwrap(), vec![1234]);
    }

    #[test]
    fn test_non_permission_errors_propagate() {
        let mut table = FakeTable::new(1234);
        table.pids = Err(IntrospectionError::Os(libc::EINVAL));
        assert_eq!(
            table.list_all_pids_or_self(),
            Err(IntrospectionError::Os(libc::EINVAL))
        );
    }

    #[test]
    fn test_thread_lookup_misses_are_none() {
        let mut table = FakeTable::new(1);
        table.threads.insert(
            (1, 7),
            ThreadInfo {
                name: "worker".to_owned(),
                run_state: ThreadRunState::Waiting as i32,
                ..ThreadInfo::default()
            },
        );
        assert!(table.thread_info(1, 7).unwrap().is_some());
        assert!(table.thread_info(1, 8).unwrap().is_none());
        assert!(table.thread_info(2, 7).unwrap().is_none());
        assert_eq!(table.list_threads(1).unwrap(), vec![7]);
    }
}
