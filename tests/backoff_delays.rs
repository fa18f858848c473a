use std::error::Error;
use std::time::Duration;

use runcmd::exec::RetryPolicy;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn default_schedule_doubles_from_five_seconds() -> TestResult {
    let delays: Vec<_> = RetryPolicy::default().delays().take(4).collect();

    assert_eq!(
        delays,
        vec![
            Duration::from_secs(5),
            Duration::from_secs(10),
            Duration::from_secs(20),
            Duration::from_secs(40),
        ]
    );
    Ok(())
}

#[test]
fn custom_policy_drives_the_schedule() -> TestResult {
    let policy = RetryPolicy {
        initial_delay: Duration::from_millis(100),
        factor: 3,
    };
    let delays: Vec<_> = policy.delays().take(3).collect();

    assert_eq!(
        delays,
        vec![
            Duration::from_millis(100),
            Duration::from_millis(300),
            Duration::from_millis(900),
        ]
    );
    Ok(())
}

#[test]
fn zero_initial_delay_stays_zero() -> TestResult {
    let policy = RetryPolicy {
        initial_delay: Duration::ZERO,
        factor: 2,
    };

    assert!(policy.delays().take(5).all(|d| d.is_zero()));
    Ok(())
}
