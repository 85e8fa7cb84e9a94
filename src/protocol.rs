//! Debug wire-protocol tokens.
//!
//! The fixed "words" a debug client and its host exchange. Every token is
//! framed by `>`/`<`; only `EOT` carries a trailing newline, it terminates
//! each transmitted block. This module just names the tokens, framing and
//! transport live with the consumer.

/// Address used for debugger/client communications.
pub const DEBUG_ADDRESS: &str = "127.0.0.1";

// Requests sent by the host.
pub const REQUEST_OK: &str = ">OK?<";
pub const REQUEST_ENV: &str = ">Environment<";
pub const REQUEST_CAPABILITIES: &str = ">Capabilities<";
pub const REQUEST_LOAD: &str = ">Load<";
pub const REQUEST_RUN: &str = ">Run<";
pub const REQUEST_COVERAGE: &str = ">Coverage<";
pub const REQUEST_PROFILE: &str = ">Profile<";
pub const REQUEST_CONTINUE: &str = ">Continue<";
pub const REQUEST_STEP: &str = ">Step<";
pub const REQUEST_STEP_OVER: &str = ">StepOver<";
pub const REQUEST_STEP_OUT: &str = ">StepOut<";
pub const REQUEST_STEP_QUIT: &str = ">StepQuit<";
pub const REQUEST_BREAK: &str = ">Break<";
pub const REQUEST_BREAK_ENABLE: &str = ">EnableBreak<";
pub const REQUEST_BREAK_IGNORE: &str = ">IgnoreBreak<";
pub const REQUEST_WATCH: &str = ">Watch<";
pub const REQUEST_WATCH_ENABLE: &str = ">EnableWatch<";
pub const REQUEST_WATCH_IGNORE: &str = ">IgnoreWatch<";
pub const REQUEST_VARIABLES: &str = ">Variables<";
pub const REQUEST_VARIABLE: &str = ">Variable<";
pub const REQUEST_SET_FILTER: &str = ">SetFilter<";
pub const REQUEST_THREAD_LIST: &str = ">ThreadList<";
pub const REQUEST_THREAD_SET: &str = ">ThreadSet<";
pub const REQUEST_EVAL: &str = ">Eval<";
pub const REQUEST_EXEC: &str = ">Exec<";
pub const REQUEST_SHUTDOWN: &str = ">Shutdown<";
pub const REQUEST_BANNER: &str = ">Banner<";
pub const REQUEST_COMPLETION: &str = ">Completion<";
pub const REQUEST_UT_PREPARE: &str = ">UTPrepare<";
pub const REQUEST_UT_RUN: &str = ">UTRun<";
pub const REQUEST_UT_STOP: &str = ">UTStop<";
pub const REQUEST_FORK_TO: &str = ">ForkTo<";
pub const REQUEST_FORK_MODE: &str = ">ForkMode<";
pub const REQUEST_CALL_TRACE: &str = ">CallTrace<";

// Responses sent by the client. Several reuse the request token verbatim.
pub const RESPONSE_OK: &str = ">OK<";
pub const RESPONSE_CAPABILITIES: &str = REQUEST_CAPABILITIES;
pub const RESPONSE_CONTINUE: &str = ">Continue<";
pub const RESPONSE_EXCEPTION: &str = ">Exception<";
pub const RESPONSE_SYNTAX: &str = ">SyntaxError<";
pub const RESPONSE_EXIT: &str = ">Exit<";
pub const RESPONSE_LINE: &str = ">Line<";
pub const RESPONSE_RAW: &str = ">Raw<";
pub const RESPONSE_CLEAR_BREAK: &str = ">ClearBreak<";
pub const RESPONSE_BP_CONDITION_ERROR: &str = ">BPConditionError<";
pub const RESPONSE_CLEAR_WATCH: &str = ">ClearWatch<";
pub const RESPONSE_WP_CONDITION_ERROR: &str = ">WPConditionError<";
pub const RESPONSE_VARIABLES: &str = REQUEST_VARIABLES;
pub const RESPONSE_VARIABLE: &str = REQUEST_VARIABLE;
pub const RESPONSE_THREAD_LIST: &str = REQUEST_THREAD_LIST;
pub const RESPONSE_THREAD_SET: &str = REQUEST_THREAD_SET;
pub const RESPONSE_STACK: &str = ">CurrentStack<";
pub const RESPONSE_BANNER: &str = REQUEST_BANNER;
pub const RESPONSE_COMPLETION: &str = REQUEST_COMPLETION;
pub const RESPONSE_UT_PREPARED: &str = ">UTPrepared<";
pub const RESPONSE_UT_START_TEST: &str = ">UTStartTest<";
pub const RESPONSE_UT_STOP_TEST: &str = ">UTStopTest<";
pub const RESPONSE_UT_TEST_FAILED: &str = ">UTTestFailed<";
pub const RESPONSE_UT_TEST_ERRORED: &str = ">UTTestErrored<";
pub const RESPONSE_UT_TEST_SKIPPED: &str = ">UTTestSkipped<";
pub const RESPONSE_UT_TEST_FAILED_EXPECTED: &str = ">UTTestFailedExpected<";
pub const RESPONSE_UT_TEST_SUCCEEDED_UNEXPECTED: &str = ">UTTestSucceededUnexpected<";
pub const RESPONSE_UT_FINISHED: &str = ">UTFinished<";
pub const RESPONSE_FORK_TO: &str = REQUEST_FORK_TO;

/// Sent by a passively started client once it is ready.
pub const PASSIVE_STARTUP: &str = ">PassiveStartup<";

pub const CALL_TRACE: &str = ">CallTrace<";

/// End-of-transmission marker, newline included.
pub const EOT: &str = ">EOT<\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_bracket_framed() {
        let tokens = [
            REQUEST_OK,
            REQUEST_CAPABILITIES,
            REQUEST_STEP_OVER,
            REQUEST_UT_RUN,
            RESPONSE_OK,
            RESPONSE_SYNTAX,
            RESPONSE_UT_TEST_SUCCEEDED_UNEXPECTED,
            PASSIVE_STARTUP,
            CALL_TRACE,
        ];
        for token in tokens {
            assert!(token.starts_with('>') && token.ends_with('<'), "{token}");
        }
    }

    #[test]
    fn test_aliased_responses_reuse_request_tokens() {
        assert_eq!(RESPONSE_CAPABILITIES, REQUEST_CAPABILITIES);
        assert_eq!(RESPONSE_VARIABLES, REQUEST_VARIABLES);
        assert_eq!(RESPONSE_VARIABLE, REQUEST_VARIABLE);
        assert_eq!(RESPONSE_THREAD_LIST, REQUEST_THREAD_LIST);
        assert_eq!(RESPONSE_THREAD_SET, REQUEST_THREAD_SET);
        assert_eq!(RESPONSE_BANNER, REQUEST_BANNER);
        assert_eq!(RESPONSE_COMPLETION, REQUEST_COMPLETION);
        assert_eq!(RESPONSE_FORK_TO, REQUEST_FORK_TO);
    }

    #[test]
    fn test_eot_terminates_with_newline() {
        assert_eq!(EOT, ">EOT<\n");
    }

    #[test]
    fn test_request_and_response_ok_differ() {
        // ">OK?<" asks, ">OK<" acknowledges.
        assert_ne!(REQUEST_OK, RESPONSE_OK);
    }
}
