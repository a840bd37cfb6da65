use std::cell::Cell;
use std::rc::Rc;

/// Ticket emitido al iniciar una carga de página
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Secuenciador de cargas: solo el último ticket emitido puede pintar.
///
/// Navegaciones rápidas (A -> B -> A) lanzan varias peticiones en paralelo; la
/// respuesta de una navegación ya superada se descarta aunque llegue al final.
#[derive(Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn clones_share_the_sequence() {
        let sequencer = RequestSequencer::new();
        let other = sequencer.clone();
        let ticket = sequencer.issue();
        other.issue();
        assert!(!sequencer.is_current(ticket));
    }
}
