mod common;

use std::net::TcpListener;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use test_log::test;

use common::fake_host;

#[test]
fn unbindable_address_exits_with_error() {
    let (_dir, paths) = fake_host();
    let taken = TcpListener::bind("127.0.0.1:0").expect("should bind a free port");
    let addr = taken.local_addr().expect("should have a local address");

    let mut child = Command::new(env!("CARGO_BIN_EXE_cpu-util-exporter"))
        .arg("--listen")
        .arg(addr.to_string())
        .arg("--period")
        .arg("0.05")
        .arg("--proc-stat")
        .arg(&paths.proc_stat)
        .arg("--cpu-root")
        .arg(&paths.cpu_root)
        .env_remove("APP_PORT")
        .env_remove("RUST_LOG")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("should start exporter");

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().expect("should poll exporter") {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            let _ = child.wait();
            panic!("exporter still running 10s after failing to bind {addr}");
        }
        thread::sleep(Duration::from_millis(20));
    };

    let output = child.wait_with_output().expect("should collect stderr");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!status.success(), "{status:?}");
    assert!(stderr.contains("failed to bind"), "{stderr}");
    drop(taken);
}
