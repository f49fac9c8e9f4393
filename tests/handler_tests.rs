//! Default handler behaviour observed through `MockSystem`

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use anyhow::{Context as _, anyhow};
    use relay::handler::{handle, handler_for};
    use relay::system::MockSystem;
    use relay::{CodedError, ExitCoder, Relay};
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("disk full")]
    struct DiskFull;

    impl ExitCoder for DiskFull {
        fn exit_code(&self) -> i32 {
            28
        }
    }

    fn cmd_system() -> MockSystem {
        MockSystem::new()
            .with_program_path("/usr/local/bin/cmd")
            .unwrap()
    }

    #[test]
    fn reports_program_and_message_then_exits_one() {
        let system = cmd_system();
        handle(&system, &anyhow!("always fails"));

        assert_eq!(system.stderr().unwrap(), "cmd: always fails\n");
        assert_eq!(system.exit_code().unwrap(), Some(1));
        assert_eq!(system.exit_count().unwrap(), 1);
    }

    #[test]
    fn coded_error_selects_exit_code() {
        let system = cmd_system();
        handle(&system, &anyhow::Error::new(CodedError::new(anyhow!("always fails"), 3)));

        assert_eq!(system.stderr().unwrap(), "cmd: always fails\n");
        assert_eq!(system.exit_code().unwrap(), Some(3));
    }

    #[test]
    fn context_chain_is_part_of_the_message() {
        let system = cmd_system();
        let err = Err::<(), _>(anyhow!("no such file"))
            .context("reading settings")
            .unwrap_err();
        handle(&system, &err);

        assert_eq!(system.stderr().unwrap(), "cmd: reading settings: no such file\n");
    }

    #[test]
    fn relay_with_default_policy_reports_trip() {
        let system = cmd_system();
        let relay = Relay::with_handler(handler_for(system.clone()));

        let finished = relay.run(|| {
            relay.check(Err::<(), _>(anyhow!("always fails")));
        });

        assert_eq!(finished, None);
        assert_eq!(system.stderr().unwrap(), "cmd: always fails\n");
        assert_eq!(system.exit_code().unwrap(), Some(1));
    }

    #[test]
    fn relay_coded_check_reaches_exit_code() {
        let system = cmd_system();
        let relay = Relay::with_handler(handler_for(system.clone()));

        relay.run(|| relay.coded_check(3, Err::<(), _>(anyhow!("always fails"))));

        assert_eq!(system.exit_code().unwrap(), Some(3));
    }

    #[test]
    fn relay_check_coder_reaches_exit_code() {
        let system = cmd_system();
        let relay = Relay::with_handler(handler_for(system.clone()));

        relay.run(|| relay.check_coder(Err::<(), _>(DiskFull)));

        assert_eq!(system.stderr().unwrap(), "cmd: disk full\n");
        assert_eq!(system.exit_code().unwrap(), Some(28));
    }

    #[test]
    fn untripped_relay_never_calls_handler() {
        let system = cmd_system();
        let relay = Relay::with_handler(handler_for(system.clone()));

        relay.run(|| relay.check(Ok::<_, DiskFull>(())));

        assert!(system.stderr().unwrap().is_empty());
        assert_eq!(system.exit_code().unwrap(), None);
    }
}
