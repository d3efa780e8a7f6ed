//! Runs the built binary as a process.

use std::process::Stdio;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::process::Command;

#[tokio::test]
async fn exits_non_zero_when_port_taken() {
    // The binary always binds 0.0.0.0:3000. If something else already owns
    // the port the bind fails all the same.
    let _holder = TcpListener::bind("0.0.0.0:3000").await.ok();

    let child = Command::new(env!("CARGO_BIN_EXE_backend-ok"))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .unwrap();

    let output = tokio::time::timeout(Duration::from_secs(10), child.wait_with_output())
        .await
        .expect("binary kept running on an occupied port")
        .unwrap();

    assert!(!output.status.success(), "status: {}", output.status);
    assert!(
        output.stdout.is_empty(),
        "unexpected stdout: {:?}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AddrInUse"), "stderr: {stderr}");
}
