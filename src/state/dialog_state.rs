// ============================================================================
// DIALOG STATE - Diálogo único de detalle de donación
// ============================================================================
// open -> (detalle cargado) -> handler de acción -> close
// Abrir otra donación reemplaza contenido y handler; nada se clona en el DOM.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{RequestSequencer, RequestTicket};
use crate::viewmodels::DonationDetail;

/// Acción del botón principal del diálogo
pub type ActionHandler = Rc<dyn Fn()>;

#[derive(Default)]
struct DialogState {
    open: bool,
    detail: Option<DonationDetail>,
    handler: Option<ActionHandler>,
}

#[derive(Clone, Default)]
pub struct DialogSlot {
    inner: Rc<RefCell<DialogState>>,
    loads: RequestSequencer,
}

impl DialogSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abre el diálogo en estado "cargando" y devuelve el ticket de la carga
    pub fn open(&self) -> RequestTicket {
        let mut state = self.inner.borrow_mut();
        state.open = true;
        state.detail = None;
        state.handler = None;
        self.loads.issue()
    }

    /// ¿Sigue abierto el diálogo de esta carga (no se cerró ni se reabrió)?
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.loads.is_current(ticket) && self.is_open()
    }

    /// Pinta el detalle si la carga sigue vigente
    pub fn show(&self, ticket: RequestTicket, detail: DonationDetail) -> bool {
        if !self.is_current(ticket) {
            log::debug!("⏭️ [DIALOG] Detalle descartado (ticket {})", ticket.id());
            return false;
        }
        self.inner.borrow_mut().detail = Some(detail);
        true
    }

    /// Reemplaza el handler anterior
    pub fn set_handler(&self, handler: ActionHandler) {
        self.inner.borrow_mut().handler = Some(handler);
    }

    pub fn handler(&self) -> Option<ActionHandler> {
        self.inner.borrow().handler.clone()
    }

    pub fn detail(&self) -> Option<DonationDetail> {
        self.inner.borrow().detail.clone()
    }

    /// El botón se habilita sólo cuando la acción tiene lo que necesita (ruta)
    pub fn action_enabled(&self) -> bool {
        let state = self.inner.borrow();
        match &state.detail {
            Some(detail) => match detail.action {
                Some(action) if action.requires_route() => detail.route.is_some(),
                Some(_) => true,
                None => false,
            },
            None => false,
        }
    }

    pub fn close(&self) {
        {
            let mut state = self.inner.borrow_mut();
            state.open = false;
            state.detail = None;
            state.handler = None;
        }
        // Invalida cargas en vuelo
        self.loads.issue();
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::models::{Donation, DonationStatus};
    use crate::viewmodels::DonationAction;

    fn detail(action: Option<DonationAction>) -> DonationDetail {
        DonationDetail {
            donation: Donation {
                id: "d1".into(),
                alimento: "Arroz".into(),
                quantidade: 10.0,
                unidade: "kg".into(),
                validade: "2025-12-01".into(),
                status: DonationStatus::Aceita,
                doador_id: None,
                receptor_id: None,
                motorista_id: None,
                data_criacao: None,
                doador_nome: None,
                receptor_nome: None,
            },
            action,
            route: None,
            route_error: None,
        }
    }

    #[test]
    fn new_handler_replaces_previous_one() {
        let slot = DialogSlot::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let counter = first.clone();
        slot.set_handler(Rc::new(move || counter.set(counter.get() + 1)));
        let counter = second.clone();
        slot.set_handler(Rc::new(move || counter.set(counter.get() + 1)));

        if let Some(handler) = slot.handler() {
            handler();
        }
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn reopening_discards_previous_load() {
        let slot = DialogSlot::new();
        let stale = slot.open();
        let fresh = slot.open();
        assert!(!slot.show(stale, detail(None)));
        assert!(slot.show(fresh, detail(None)));
    }

    #[test]
    fn reopened_dialog_is_not_current_for_earlier_load() {
        let slot = DialogSlot::new();
        let first = slot.open();
        let second = slot.open();
        assert!(slot.is_open());
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));

        slot.close();
        assert!(!slot.is_current(second));
    }

    #[test]
    fn close_clears_everything() {
        let slot = DialogSlot::new();
        let ticket = slot.open();
        slot.set_handler(Rc::new(|| {}));
        slot.close();
        assert!(!slot.is_open());
        assert!(slot.handler().is_none());
        assert!(!slot.show(ticket, detail(None)));
    }

    #[test]
    fn route_actions_wait_for_route() {
        let slot = DialogSlot::new();
        let ticket = slot.open();
        slot.show(ticket, detail(Some(DonationAction::AcceptDelivery)));
        assert!(!slot.action_enabled());

        let ticket = slot.open();
        slot.show(ticket, detail(Some(DonationAction::AcceptDonation)));
        assert!(slot.action_enabled());
    }
}
