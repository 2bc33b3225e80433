use std::{
    io,
    net::{TcpListener, TcpStream},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use parking_lot::Mutex;
use tungstenite::{accept, Message, WebSocket};

use crate::{config::DEFAULT_BROADCAST_INTERVAL_MS, network::snapshot, world::SimulationWorld};

/// How long the accept loop sleeps between polls of the listener.
const ACCEPT_POLL: Duration = Duration::from_millis(50);

/// Read/write timeout on every client stream. Bounds how long one peer
/// can hold the accept thread mid-handshake or the broadcast pass
/// mid-send.
const CLIENT_IO_TIMEOUT: Duration = Duration::from_secs(2);

/// WebSocket server broadcasting the particle view at a fixed interval.
///
/// Owns two threads: an accept loop collecting clients and a broadcast
/// loop that locks the shared world, encodes one snapshot, and pushes it
/// to every client. Clients whose send fails or times out are dropped, so
/// one dead peer never stalls the rest. The server only ever reads the
/// world.
pub struct BroadcastServer {
    port: u16,
    interval: Duration,
    running: Arc<AtomicBool>,
    clients: Arc<Mutex<Vec<WebSocket<TcpStream>>>>,
    accept_thread: Option<JoinHandle<()>>,
    broadcast_thread: Option<JoinHandle<()>>,
}

impl BroadcastServer {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            interval: Duration::from_millis(DEFAULT_BROADCAST_INTERVAL_MS),
            running: Arc::new(AtomicBool::new(false)),
            clients: Arc::new(Mutex::new(Vec::new())),
            accept_thread: None,
            broadcast_thread: None,
        }
    }

    /// Interval between broadcast frames (default 20 ms, i.e. 50 FPS).
    /// Takes effect on the next `start`.
    pub fn set_broadcast_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn broadcast_interval(&self) -> Duration {
        self.interval
    }

    /// Port the listener is bound to. After a `start` with port 0 this is
    /// the ephemeral port the OS picked.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Number of currently connected clients.
    pub fn client_count(&self) -> usize {
        self.clients.lock().len()
    }

    /// Binds the listener and spawns the accept and broadcast threads.
    /// Starting an already running server is a no-op.
    ///
    /// `world` is the shared simulation state; the broadcast thread takes
    /// the same lock the stepping loop holds across each `step` call.
    pub fn start(&mut self, world: Arc<Mutex<SimulationWorld>>) -> io::Result<()> {
        if self.running.load(Ordering::SeqCst) {
            return Ok(());
        }

        let listener = TcpListener::bind(("0.0.0.0", self.port))?;
        listener.set_nonblocking(true)?;
        self.port = listener.local_addr()?.port();
        self.running.store(true, Ordering::SeqCst);

        let running = Arc::clone(&self.running);
        let clients = Arc::clone(&self.clients);
        self.accept_thread = Some(thread::spawn(move || {
            accept_loop(listener, running, clients);
        }));

        let running = Arc::clone(&self.running);
        let clients = Arc::clone(&self.clients);
        let interval = self.interval;
        self.broadcast_thread = Some(thread::spawn(move || {
            broadcast_loop(world, running, clients, interval);
        }));

        log::info!(
            "broadcasting on ws://0.0.0.0:{} every {:?}",
            self.port,
            self.interval
        );
        Ok(())
    }

    /// Stops both threads and disconnects every client. Safe to call more
    /// than once.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = self.accept_thread.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.broadcast_thread.take() {
            let _ = handle.join();
        }
        self.clients.lock().clear();
        log::info!("broadcast server stopped");
    }
}

impl Drop for BroadcastServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn accept_loop(
    listener: TcpListener,
    running: Arc<AtomicBool>,
    clients: Arc<Mutex<Vec<WebSocket<TcpStream>>>>,
) {
    while running.load(Ordering::SeqCst) {
        match listener.accept() {
            Ok((stream, peer)) => {
                // The listener polls, but each client stream goes back to
                // blocking mode for the handshake and the sends. The IO
                // timeouts bound both; a timed-out handshake surfaces as
                // an error below and the stream is dropped.
                let configured = stream
                    .set_nonblocking(false)
                    .and_then(|()| stream.set_read_timeout(Some(CLIENT_IO_TIMEOUT)))
                    .and_then(|()| stream.set_write_timeout(Some(CLIENT_IO_TIMEOUT)));
                if let Err(err) = configured {
                    log::warn!("could not configure client stream: {err}");
                    continue;
                }
                match accept(stream) {
                    Ok(socket) => {
                        log::info!("client connected: {peer}");
                        clients.lock().push(socket);
                    }
                    Err(err) => log::warn!("websocket handshake failed: {err}"),
                }
            }
            Err(ref err) if err.kind() == io::ErrorKind::WouldBlock => {
                thread::sleep(ACCEPT_POLL);
            }
            Err(err) => {
                log::warn!("accept failed: {err}");
                thread::sleep(ACCEPT_POLL);
            }
        }
    }
}

fn broadcast_loop(
    world: Arc<Mutex<SimulationWorld>>,
    running: Arc<AtomicBool>,
    clients: Arc<Mutex<Vec<WebSocket<TcpStream>>>>,
    interval: Duration,
) {
    loop {
        thread::sleep(interval);
        if !running.load(Ordering::SeqCst) {
            break;
        }

        // Hold the world lock for the snapshot only, never for the sends.
        let payload = {
            let world = world.lock();
            snapshot::encode(world.particles())
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("snapshot encoding failed: {err}");
                continue;
            }
        };

        let mut clients = clients.lock();
        clients.retain_mut(|socket| match socket.send(Message::text(payload.clone())) {
            Ok(()) => true,
            Err(err) => {
                log::info!("dropping client: {err}");
                false
            }
        });
    }
}
