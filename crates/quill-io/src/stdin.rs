use tokio::io::{AsyncBufReadExt, BufReader};

/// Feed stdin lines to the callback until EOF. Each line is treated as
/// the full current input value.
pub async fn read_lines<F>(mut on_line: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        on_line(line);
    }

    Ok(())
}
