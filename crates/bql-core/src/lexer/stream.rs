//! Background token producer
//!
//! Runs a [`Lexer`] on its own tokio task and hands tokens to the consumer
//! through a bounded channel. The producer suspends while the channel is
//! full and the consumer suspends while it is empty.
//!
//! With a capacity of 0 every token is a synchronous handoff: the producer
//! does not scan the next token until the consumer has taken the current one.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use super::scanner::Lexer;
use super::token::Token;

/// Token stream configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Queue capacity between producer and consumer. 0 means synchronous handoff.
    #[serde(default)]
    pub capacity: usize,
}

impl StreamConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    fn is_rendezvous(&self) -> bool {
        self.capacity == 0
    }

    /// Capacity actually handed to the channel; tokio needs at least one slot
    fn channel_capacity(&self) -> usize {
        self.capacity.max(1)
    }
}

/// A token in flight, with the receipt the producer waits on in rendezvous mode
#[derive(Debug)]
struct Handoff {
    token: Token,
    ack: Option<oneshot::Sender<()>>,
}

impl Handoff {
    fn take(self) -> Token {
        if let Some(ack) = self.ack {
            // The producer may already be gone; nothing to confirm then.
            let _ = ack.send(());
        }
        self.token
    }
}

/// Consumer side of a spawned lexer
#[derive(Debug)]
pub struct TokenStream {
    rx: mpsc::Receiver<Handoff>,
    producer: JoinHandle<()>,
}

impl TokenStream {
    /// Receive the next token; `None` once the terminal token has been taken
    pub async fn recv(&mut self) -> Option<Token> {
        self.rx.recv().await.map(Handoff::take)
    }

    /// Drain the stream to completion
    pub async fn collect_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.recv().await {
            tokens.push(token);
        }
        tokens
    }

    /// Whether the producer task has finished
    pub fn is_finished(&self) -> bool {
        self.producer.is_finished()
    }

    /// Convert into a `tokio_stream::Stream`
    pub fn into_stream(self) -> impl Stream<Item = Token> + Unpin {
        ReceiverStream::new(self.rx).map(Handoff::take)
    }
}

/// Spawn a lexer over `input` on the current tokio runtime.
///
/// Must be called from within a runtime. Dropping the returned stream
/// stops the producer at its next send.
pub fn spawn(input: impl Into<String>, config: StreamConfig) -> TokenStream {
    let input = input.into();
    let rendezvous = config.is_rendezvous();
    let (tx, rx) = mpsc::channel(config.channel_capacity());

    let producer = tokio::spawn(async move {
        for token in Lexer::new(&input) {
            let (ack, receipt) = if rendezvous {
                let (ack, receipt) = oneshot::channel();
                (Some(ack), Some(receipt))
            } else {
                (None, None)
            };

            if tx.send(Handoff { token, ack }).await.is_err() {
                debug!("token consumer dropped, stopping lexer");
                return;
            }
            if let Some(receipt) = receipt {
                if receipt.await.is_err() {
                    debug!("token consumer dropped before taking token, stopping lexer");
                    return;
                }
            }
        }
    });

    TokenStream { rx, producer }
}
