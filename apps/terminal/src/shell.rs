//! # Shell
//!
//! The operator-facing line shell: parses typed commands, dispatches them to
//! the command layer, and renders the resulting views. It is the stand-in
//! for the register's desktop window - the buttons and inputs of the screen
//! become named commands.
//!
//! ## Command Set
//! ```text
//! buscar <texto>        search the catalog (empty text lists everything)
//! add <sku>             ring up an item
//! qty <sku> <delta>     adjust a line's quantity (+/-)
//! rm <sku>              remove a line
//! desconto <valor>      set the sale discount (e.g. 5 or 5.90)
//! pagamento <metodo>    select payment (dinheiro/credito/debito/pix/voucher)
//! carrinho              show the cart
//! finalizar             close out the sale
//! cancelar              cancel the sale
//! ajuda                 show this help
//! sair                  quit
//! ```
//!
//! ## Status Ownership
//! The shell is the PARENT of the sale session: it owns the authoritative
//! `SaleStatus`, fed by the notifier channel the command layer signals
//! through. After every dispatch the channel is drained and the last signal
//! wins - call order matches mutation order because everything here is
//! synchronous.

use std::sync::mpsc;

use tracing::debug;

use caixa_core::{Catalog, Money, SaleStatus};

use crate::commands::{
    add_to_cart, adjust_quantity, cancel_sale, finalize_sale, get_cart, remove_from_cart,
    search_catalog, select_payment, set_discount, CartView, CatalogItemView, ReceiptView,
};
use crate::state::{CatalogState, SessionState, StatusNotifier};

// =============================================================================
// Command Parsing
// =============================================================================

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Add(String),
    Adjust { sku: String, delta: i64 },
    Remove(String),
    Discount(String),
    Payment(String),
    ShowCart,
    Finalize,
    Cancel,
    Help,
    Quit,
}

/// Parses one input line. A blank line re-renders the cart.
pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    let verb = match words.next() {
        Some(v) => v.to_lowercase(),
        None => return Ok(ShellCommand::ShowCart),
    };
    let rest: Vec<&str> = words.collect();

    let one_arg = |name: &str| -> Result<String, String> {
        match rest.as_slice() {
            [arg] => Ok((*arg).to_string()),
            _ => Err(format!("uso: {name} <argumento>")),
        }
    };

    match verb.as_str() {
        // Search takes the remainder verbatim; an empty query is legal
        "buscar" => Ok(ShellCommand::Search(rest.join(" "))),
        "add" => Ok(ShellCommand::Add(one_arg("add")?)),
        "qty" => match rest.as_slice() {
            [sku, delta] => {
                let delta: i64 = delta
                    .parse()
                    .map_err(|_| format!("delta inválido: {delta}"))?;
                Ok(ShellCommand::Adjust {
                    sku: (*sku).to_string(),
                    delta,
                })
            }
            _ => Err("uso: qty <sku> <delta>".to_string()),
        },
        "rm" => Ok(ShellCommand::Remove(one_arg("rm")?)),
        "desconto" => Ok(ShellCommand::Discount(one_arg("desconto")?)),
        "pagamento" => Ok(ShellCommand::Payment(one_arg("pagamento")?)),
        "carrinho" => Ok(ShellCommand::ShowCart),
        "finalizar" => Ok(ShellCommand::Finalize),
        "cancelar" => Ok(ShellCommand::Cancel),
        "ajuda" | "help" => Ok(ShellCommand::Help),
        "sair" | "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("comando desconhecido: {other} (tente 'ajuda')")),
    }
}

// =============================================================================
// Shell
// =============================================================================

/// Outcome of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep looping; the string is what to print.
    Continue(String),
    /// Operator asked to leave.
    Quit,
}

/// The shell: session host plus the parent-side sale status.
pub struct Shell {
    catalog: CatalogState,
    session: SessionState,
    notifier: StatusNotifier,
    status_rx: mpsc::Receiver<SaleStatus>,
    status: SaleStatus,
}

impl Shell {
    /// Wires up a shell over a seeded catalog.
    pub fn new(catalog: Catalog) -> Self {
        let (notifier, status_rx) = StatusNotifier::channel();
        Shell {
            catalog: CatalogState::new(catalog),
            session: SessionState::new(),
            notifier,
            status_rx,
            status: SaleStatus::default(),
        }
    }

    /// The parent-owned sale status.
    pub fn status(&self) -> SaleStatus {
        self.status
    }

    /// Parses and executes one input line, returning what to print.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => return Outcome::Continue(message),
        };
        debug!(?command, "dispatching");

        let output = match command {
            ShellCommand::Search(query) => {
                render_catalog(&search_catalog(&self.catalog, &query))
            }
            ShellCommand::Add(sku) => {
                match add_to_cart(&self.catalog, &self.session, &self.notifier, &sku) {
                    Ok(view) => render_cart(&view),
                    Err(err) => err.message,
                }
            }
            ShellCommand::Adjust { sku, delta } => {
                render_cart(&adjust_quantity(&self.session, &sku, delta))
            }
            ShellCommand::Remove(sku) => render_cart(&remove_from_cart(&self.session, &sku)),
            ShellCommand::Discount(amount) => match set_discount(&self.session, &amount) {
                Ok(view) => render_cart(&view),
                Err(err) => err.message,
            },
            ShellCommand::Payment(method) => match select_payment(&self.session, &method) {
                Ok(view) => render_cart(&view),
                Err(err) => err.message,
            },
            ShellCommand::ShowCart => render_cart(&get_cart(&self.session)),
            ShellCommand::Finalize => self.finalize(),
            ShellCommand::Cancel => render_cart(&cancel_sale(&self.session, &self.notifier)),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Outcome::Quit,
        };

        self.drain_status();
        Outcome::Continue(format!("{output}\n[status: {}]", status_label(self.status)))
    }

    /// The finalize action, with the empty-cart guard applied up front: the
    /// action is disabled, not attempted-and-failed, when nothing is rung up.
    fn finalize(&mut self) -> String {
        if !get_cart(&self.session).can_finalize {
            return "finalizar indisponível: carrinho vazio".to_string();
        }

        match finalize_sale(&self.session, &self.notifier) {
            Ok(receipt) => render_receipt(&receipt),
            Err(err) => err.message,
        }
    }

    /// Applies pending status signals to the parent-owned copy.
    fn drain_status(&mut self) {
        for status in self.status_rx.try_iter() {
            self.status = status;
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

const HELP: &str = "\
comandos:
  buscar <texto>        busca no catálogo (vazio lista tudo)
  add <sku>             lança um item
  qty <sku> <delta>     ajusta a quantidade de uma linha
  rm <sku>              remove uma linha
  desconto <valor>      define o desconto da venda
  pagamento <metodo>    dinheiro | credito | debito | pix | voucher
  carrinho              mostra o carrinho
  finalizar             fecha a venda
  cancelar              cancela a venda
  sair                  encerra";

fn status_label(status: SaleStatus) -> &'static str {
    match status {
        SaleStatus::Open => "Aberto",
        SaleStatus::InProgress => "Em venda",
        SaleStatus::Finalized => "Finalizada",
    }
}

fn money(cents: i64) -> Money {
    Money::from_cents(cents)
}

fn render_catalog(items: &[CatalogItemView]) -> String {
    if items.is_empty() {
        return "nenhum item encontrado".to_string();
    }

    let mut out = format!("{} resultado(s):", items.len());
    for item in items {
        out.push_str(&format!(
            "\n  {}  {:<28} {:>10}  estoque {}  cód {}",
            item.sku,
            item.name,
            money(item.unit_price_cents).to_string(),
            item.stock_quantity,
            item.barcode,
        ));
    }
    out
}

fn render_cart(view: &CartView) -> String {
    let mut out = String::new();

    if view.lines.is_empty() {
        out.push_str("carrinho vazio");
    } else {
        for line in &view.lines {
            out.push_str(&format!(
                "  {}  {:<28} x{:<3} {:>10}  = {}\n",
                line.sku,
                line.name,
                line.quantity,
                money(line.unit_price_cents).to_string(),
                money(line.line_total_cents),
            ));
        }
        out.push_str("  ----------------------------------------");
    }

    out.push_str(&format!(
        "\n  subtotal {}  desconto {}  total {}\n  pagamento: {}",
        money(view.totals.subtotal_cents),
        money(view.totals.discount_cents),
        money(view.totals.total_cents),
        view.payment_method.label(),
    ));
    out
}

fn render_receipt(receipt: &ReceiptView) -> String {
    let mut out = format!("venda finalizada  #{}\n", receipt.id);
    for line in &receipt.lines {
        out.push_str(&format!(
            "  {}  {:<28} x{:<3} = {}\n",
            line.sku,
            line.name,
            line.quantity,
            money(line.line_total_cents),
        ));
    }
    out.push_str(&format!(
        "  total {} ({})  em {}",
        money(receipt.totals.total_cents),
        receipt.payment_method.label(),
        receipt.finalized_at,
    ));
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use caixa_core::demo_catalog;

    fn shell() -> Shell {
        Shell::new(demo_catalog())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("add 1001"),
            Ok(ShellCommand::Add("1001".to_string()))
        );
        assert_eq!(
            parse_command("qty 1001 -2"),
            Ok(ShellCommand::Adjust {
                sku: "1001".to_string(),
                delta: -2
            })
        );
        assert_eq!(
            parse_command("buscar refrigerante 2l"),
            Ok(ShellCommand::Search("refrigerante 2l".to_string()))
        );
        assert_eq!(parse_command("buscar"), Ok(ShellCommand::Search(String::new())));
        assert_eq!(parse_command(""), Ok(ShellCommand::ShowCart));
        assert_eq!(parse_command("FINALIZAR"), Ok(ShellCommand::Finalize));
        assert!(parse_command("qty 1001").is_err());
        assert!(parse_command("qty 1001 muitos").is_err());
        assert!(parse_command("xyzzy").is_err());
    }

    #[test]
    fn test_status_machine_through_the_shell() {
        let mut shell = shell();
        assert_eq!(shell.status(), SaleStatus::Open);

        shell.execute_line("add 1003");
        assert_eq!(shell.status(), SaleStatus::InProgress);

        shell.execute_line("finalizar");
        assert_eq!(shell.status(), SaleStatus::Finalized);

        // Finalized is not terminal: the next add starts a new sale
        shell.execute_line("add 1001");
        assert_eq!(shell.status(), SaleStatus::InProgress);

        shell.execute_line("cancelar");
        assert_eq!(shell.status(), SaleStatus::Open);
    }

    #[test]
    fn test_finalize_disabled_on_empty_cart() {
        let mut shell = shell();

        let outcome = shell.execute_line("finalizar");
        match outcome {
            Outcome::Continue(output) => {
                assert!(output.contains("finalizar indisponível"), "{output}")
            }
            Outcome::Quit => panic!("should not quit"),
        }
        // Status untouched: the action never ran
        assert_eq!(shell.status(), SaleStatus::Open);
    }

    #[test]
    fn test_full_sale_renders_expected_totals() {
        let mut shell = shell();

        shell.execute_line("add 1001");
        shell.execute_line("add 1002");
        shell.execute_line("add 1002");

        let outcome = shell.execute_line("carrinho");
        let Outcome::Continue(output) = outcome else {
            panic!("should continue");
        };
        assert!(output.contains("subtotal R$ 42.90"), "{output}");

        shell.execute_line("desconto 50");
        let Outcome::Continue(output) = shell.execute_line("carrinho") else {
            panic!("should continue");
        };
        assert!(output.contains("total R$ 0.00"), "{output}");
    }

    #[test]
    fn test_unknown_sku_reported_without_breaking_the_sale() {
        let mut shell = shell();

        let Outcome::Continue(output) = shell.execute_line("add 9999") else {
            panic!("should continue");
        };
        assert!(output.contains("Item not found"), "{output}");
        assert_eq!(shell.status(), SaleStatus::Open);
    }

    #[test]
    fn test_quit() {
        let mut shell = shell();
        assert_eq!(shell.execute_line("sair"), Outcome::Quit);
    }
}
