// tests/cli_tests.rs
//
// End-to-end tests for the console driver, feeding input the way stdin would.

use std::io::Cursor;
use numutil::cli;
use numutil::config::NumUtilConfig;

#[cfg(test)]
mod cli_tests {
    use super::*;

    fn run_with(config: &NumUtilConfig, args: &[&str], input: &str) -> Result<String, String> {
        let args: Vec<String> = std::iter::once("numutil")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect();
        let mut output = Vec::new();
        cli::run(&args, config, Cursor::new(input), &mut output).map_err(|e| e.to_string())?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn run(args: &[&str], input: &str) -> Result<String, String> {
        run_with(&NumUtilConfig::default(), args, input)
    }

    #[test]
    fn test_summary_report() {
        let output = run(&["summary"], "5\n48 18 -3\n7 0\n").unwrap();
        assert_eq!(
            output,
            "Input: n=5, arr=48 18 -3 7 0\n\
             Max: 48, Min: -3, Sum: 70\n\
             GCD of first two: 6\n\
             Is 5 prime? true\n"
        );
    }

    #[test]
    fn test_summary_truncated_input() {
        let err = run(&["summary"], "4\n1 2 3").unwrap_err();
        assert!(err.contains("unexpected end of input"));
    }

    #[test]
    fn test_summary_empty_sequence() {
        let err = run(&["summary"], "0\n").unwrap_err();
        assert_eq!(err, "Input sequence is empty");
    }

    #[test]
    fn test_summary_sum_overflow() {
        let err = run(&["summary"], "2\n9223372036854775807 1\n").unwrap_err();
        assert_eq!(err, "Overflow: result of sum_vec does not fit in i64");
    }

    #[test]
    fn test_summary_first_two_zero() {
        let err = run(&["summary"], "2\n0 0\n").unwrap_err();
        assert_eq!(err, "Domain error: gcd(0, 0) is undefined");
    }

    #[test]
    fn test_summary_single_value_skips_gcd() {
        let output = run(&["summary"], "1\n0\n").unwrap();
        assert_eq!(output, "Input: n=1, arr=0\nMax: 0, Min: 0, Sum: 0\nIs 1 prime? false\n");
    }

    #[test]
    fn test_primes_with_separator() {
        let mut config = NumUtilConfig::default();
        config.output.separator = ",".to_string();
        let output = run_with(&config, &["primes", "20"], "").unwrap();
        assert_eq!(output, "2,3,5,7,11,13,17,19\n");
    }

    #[test]
    fn test_primes_above_limit() {
        let mut config = NumUtilConfig::default();
        config.sieve.max_limit = 100;
        let err = run_with(&config, &["primes", "101"], "").unwrap_err();
        assert!(err.contains("exceeds configured limit 100"));
    }

    #[test]
    fn test_factor() {
        assert_eq!(run(&["factor", "360"], "").unwrap(), "360 = 2^3 * 3^2 * 5\n");
        assert_eq!(run(&["factor", "1"], "").unwrap(), "1 = 1\n");
    }

    #[test]
    fn test_single_operations() {
        assert_eq!(run(&["power", "3", "5"], "").unwrap(), "243\n");
        assert_eq!(run(&["modpow", "2", "10", "1000"], "").unwrap(), "24\n");
        assert_eq!(run(&["gcd", "48", "18"], "").unwrap(), "6\n");
        assert_eq!(run(&["lcm", "4", "6"], "").unwrap(), "12\n");
        assert_eq!(run(&["isprime", "97"], "").unwrap(), "true\n");
        assert_eq!(run(&["factorial", "5"], "").unwrap(), "120\n");
        assert_eq!(run(&["permutation", "5", "2"], "").unwrap(), "20\n");
        assert_eq!(run(&["combination", "5", "2"], "").unwrap(), "10\n");
        assert_eq!(run(&["totient", "36"], "").unwrap(), "12\n");
        assert_eq!(run(&["fibonacci", "90"], "").unwrap(), "2880067194370816120\n");
        assert_eq!(run(&["palindrome", "racecar"], "").unwrap(), "true\n");
    }

    #[test]
    fn test_operation_errors_surface() {
        assert_eq!(
            run(&["gcd", "0", "0"], "").unwrap_err(),
            "Domain error: gcd(0, 0) is undefined"
        );
        assert_eq!(
            run(&["factorial", "25"], "").unwrap_err(),
            "Overflow: result of factorial does not fit in i64"
        );
        assert!(run(&["power", "2"], "").unwrap_err().contains("missing operand #2"));
    }
}
