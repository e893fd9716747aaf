mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::Server;
    use predicates::str::{contains, ends_with, starts_with};

    use std::io::Write;
    use std::process::{Command, Output, Stdio};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "urlook";

    fn urlook() -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--no-config").env("NO_COLOR", "1");
        Ok(cmd)
    }

    fn file_with(content: &str) -> Result<tempfile::NamedTempFile, Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    fn run_with_stdin(mut cmd: Command, input: &str) -> Result<Output, Box<dyn std::error::Error>> {
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            // The process may exit before reading anything
            let _ = stdin.write_all(input.as_bytes());
        }
        Ok(child.wait_with_output()?)
    }

    #[test]
    fn test_output__when_no_files_provided() -> TestResult {
        let mut cmd = urlook()?;

        cmd.assert()
            .failure()
            .stderr(contains("specify at least one filename"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_no_issues() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create_async().await;
        let endpoint = server.url() + "/200";
        let file = file_with(&endpoint)?;
        let mut cmd = urlook()?;

        cmd.arg(file.path());

        cmd.assert()
            .success()
            .stdout(starts_with(format!("URLs to check: 1\n   1. {endpoint}\n")))
            .stdout(contains("✓"))
            .stdout(ends_with("no issues found\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_single_issue() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create_async().await;
        let endpoint = server.url() + "/404";
        let file = file_with(&endpoint)?;
        let mut cmd = urlook()?;

        cmd.arg(file.path());

        cmd.assert()
            .failure()
            .stdout(contains(format!(
                "Issues (1):\n   1. {endpoint} [404, Not Found]\n"
            )))
            .stderr(ends_with("issues found: 1\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_multiple_issues() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create_async().await;
        let _m401 = server.mock("GET", "/401").with_status(401).create_async().await;
        let endpoint_404 = server.url() + "/404";
        let endpoint_401 = server.url() + "/401";
        let file = file_with(&format!("{endpoint_404} {endpoint_401}"))?;
        let mut cmd = urlook()?;

        cmd.arg(file.path());

        // Issues keep the order the URLs appear in
        cmd.assert()
            .failure()
            .stdout(contains(format!(
                "   1. {endpoint_404} [404, Not Found]\n   2. {endpoint_401} [401, Unauthorized]\n"
            )))
            .stderr(contains("issues found: 2"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_white_list_provided() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create_async().await;
        let m404 = server
            .mock("GET", "/404")
            .with_status(404)
            .expect(0)
            .create_async()
            .await;
        let endpoint_200 = server.url() + "/200";
        let endpoint_404 = server.url() + "/404";
        let file = file_with(&format!("{endpoint_200} {endpoint_404}"))?;
        let mut cmd = urlook()?;

        cmd.arg(file.path()).arg("-w").arg("/404");

        cmd.assert()
            .success()
            .stdout(starts_with(format!("URLs to check: 1\n   1. {endpoint_200}\n")))
            .stdout(contains(format!("White listed URLs (1):\n - {endpoint_404}\n")))
            .stdout(ends_with("no issues found\n"));
        m404.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_duplicates_fail() -> TestResult {
        let mut server = Server::new_async().await;
        let m200 = server
            .mock("GET", "/200")
            .with_status(200)
            .expect(1)
            .create_async()
            .await;
        let endpoint = server.url() + "/200";
        let file = file_with(&format!("{endpoint}\n{endpoint}\n"))?;
        let mut cmd = urlook()?;

        cmd.arg(file.path()).arg("--fail-on-duplicate");

        cmd.assert()
            .failure()
            .stdout(contains(format!("Duplicates:\n - {endpoint} (2)\n")))
            .stderr(contains("duplicates found: 1"));
        m200.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_duplicates_allowed() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create_async().await;
        let endpoint = server.url() + "/200";
        let file = file_with(&format!("{endpoint}\n{endpoint}\n"))?;
        let mut cmd = urlook()?;

        cmd.arg(file.path());

        cmd.assert()
            .success()
            .stdout(contains("URLs to check: 1\n"))
            .stdout(ends_with("no issues found\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_redirect() -> TestResult {
        let mut server = Server::new_async().await;
        let _m301 = server
            .mock("GET", "/old")
            .with_status(301)
            .with_header("location", "/new")
            .create_async()
            .await;
        let endpoint = server.url() + "/old";
        let file = file_with(&endpoint)?;

        let mut cmd = urlook()?;
        cmd.arg(file.path());
        cmd.assert()
            .failure()
            .stdout(contains(format!("{endpoint} [301, Moved Permanently] -> /new")));

        let mut cmd = urlook()?;
        cmd.arg(file.path()).arg("--allow-redirects");
        cmd.assert().success();
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_reading_stdin() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create_async().await;
        let endpoint = server.url() + "/200";
        let output = run_with_stdin(urlook()?, &format!("see {endpoint} for details"))?;

        output
            .assert()
            .success()
            .stdout(contains(format!("   1. {endpoint}\n")))
            .stdout(ends_with("no issues found\n"));
        Ok(())
    }

    #[test]
    fn test_output__when_stdin_and_files_provided() -> TestResult {
        let file = file_with("https://example.com")?;
        let mut cmd = urlook()?;
        cmd.arg(file.path());

        let output = run_with_stdin(cmd, "https://example.org")?;

        output.assert().failure().stderr(contains(
            "please specify at least one filename or pass text from standard input",
        ));
        Ok(())
    }

    #[test]
    fn test_output__when_no_urls_found() -> TestResult {
        let file = file_with("nothing to see here, ftp://example.com")?;

        let mut cmd = urlook()?;
        cmd.arg(file.path());
        cmd.assert().success().stdout("no URLs found\n");

        let mut cmd = urlook()?;
        cmd.arg(file.path()).arg("--fail-on-empty");
        cmd.assert().failure().stderr(contains("no URLs found"));
        Ok(())
    }

    #[test]
    fn test_output__when_non_existing_file_provided() -> TestResult {
        let mut cmd = urlook()?;

        cmd.arg("some-file-that-doesnt-exist");

        cmd.assert()
            .failure()
            .stderr(contains("could not open file some-file-that-doesnt-exist"));
        Ok(())
    }

    #[test]
    fn test_output__when_negative_timeout_provided() -> TestResult {
        let file = file_with("https://example.com")?;
        let mut cmd = urlook()?;

        cmd.arg(file.path()).arg("--timeout").arg("-1");

        cmd.assert()
            .failure()
            .stderr(contains("invalid timeout value: -1"));
        Ok(())
    }

    #[test]
    fn test_output__when_non_number_timeout_provided() -> TestResult {
        let file = file_with("https://example.com")?;
        let mut cmd = urlook()?;

        cmd.arg(file.path()).arg("--timeout").arg("soon");

        cmd.assert().failure().stderr(contains("invalid value 'soon'"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__json_format() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create_async().await;
        let endpoint = server.url() + "/404";
        let file = file_with(&endpoint)?;
        let mut cmd = urlook()?;

        cmd.arg(file.path()).arg("--format").arg("json");

        let output = cmd.output()?;
        assert_eq!(output.status.code(), Some(1));
        let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(json["checked"], 1);
        assert_eq!(json["verdict"], "issues found: 1");
        assert_eq!(json["issues"][0]["url"], endpoint.as_str());
        Ok(())
    }

    #[tokio::test]
    async fn test_output__minimal_quiet_format() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create_async().await;
        let file = file_with(&(server.url() + "/200"))?;
        let mut cmd = urlook()?;

        cmd.arg(file.path()).arg("--format").arg("minimal").arg("-q");

        cmd.assert().success().stdout("\nno issues found\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_output__config_file_is_used() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create_async().await;
        let endpoint = server.url() + "/404";
        let file = file_with(&endpoint)?;
        let config = file_with("white_list = [\"/404\"]\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.env("NO_COLOR", "1")
            .arg(file.path())
            .arg("--config")
            .arg(config.path());

        cmd.assert()
            .success()
            .stdout(contains(format!("White listed URLs (1):\n - {endpoint}\n")));
        Ok(())
    }
}
