use std::io::{self, BufRead, Write};

use crate::api::OrderResult;
use crate::trading::OrderClient;

/// Interactive menu loop. Generic over reader/writer so scripted sessions
/// run against in-memory buffers in tests.
pub struct InteractiveShell<R, W> {
    client: OrderClient,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveShell<R, W> {
    pub fn new(client: OrderClient, input: R, output: W) -> Self {
        Self {
            client,
            input,
            output,
        }
    }

    /// Runs until the operator picks "3" (or the input stream closes).
    /// Per-iteration failures are printed and the loop continues; only I/O
    /// errors on the terminal itself abort.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let choice = match self.prompt("Enter choice (1/2/3): ") {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            };

            match choice.as_str() {
                "1" => self.handle_order(false).await?,
                "2" => self.handle_order(true).await?,
                "3" => {
                    writeln!(self.output, "Exiting bot.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please enter 1, 2, or 3.")?,
            }
        }
        Ok(())
    }

    async fn handle_order(&mut self, is_limit: bool) -> io::Result<()> {
        let symbol = self.prompt("Enter SYMBOL (e.g., BTCUSDT): ")?.to_uppercase();
        let side = self.prompt("Enter SIDE (BUY or SELL): ")?.to_uppercase();

        let quantity = match self.prompt("Enter QUANTITY (e.g., 0.001): ")?.parse::<f64>() {
            Ok(quantity) => quantity,
            Err(e) => return self.report_input_error(e),
        };

        let placed = if is_limit {
            let price = match self
                .prompt("Enter LIMIT PRICE (e.g., 60000.00): ")?
                .parse::<f64>()
            {
                Ok(price) => price,
                Err(e) => return self.report_input_error(e),
            };
            self.client
                .place_limit_order(&symbol, &side, quantity, price)
                .await
        } else {
            self.client.place_market_order(&symbol, &side, quantity).await
        };

        match placed {
            Ok(order) => self.print_order_summary(&order)?,
            Err(e) => writeln!(self.output, "Order failed: {}", e)?,
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    fn report_input_error(&mut self, e: std::num::ParseFloatError) -> io::Result<()> {
        writeln!(
            self.output,
            "Input error: {}. Please enter a valid number.",
            e
        )
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "Simple Futures Bot CLI")?;
        writeln!(self.output, "1. Place MARKET order")?;
        writeln!(self.output, "2. Place LIMIT order")?;
        writeln!(self.output, "3. Exit")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        Ok(())
    }

    fn print_order_summary(&mut self, order: &OrderResult) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Order details (ID: {}) ---", order.order_id)?;
        writeln!(
            self.output,
            "SYMBOL: {} | SIDE: {} | TYPE: {}",
            order.symbol, order.side, order.order_type
        )?;
        writeln!(
            self.output,
            "QUANTITY: {} | PRICE: {}",
            order.orig_qty, order.price
        )?;
        writeln!(self.output, "STATUS: {}", order.status)?;
        writeln!(self.output)?;
        Ok(())
    }
}
