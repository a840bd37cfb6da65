// ============================================================================
// SESSION STATE - Contexto explícito de sesión (token + perfil)
// ============================================================================
// login -> begin(), logout / 401 / 403 -> teardown()
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use gloo_storage::{LocalStorage, Storage};
use web_sys::window;
use crate::models::{Role, Session};
use crate::utils::constants::{ROLE_STORAGE_KEY, TOKEN_STORAGE_KEY, USER_ID_STORAGE_KEY};

/// Almacenamiento clave/valor donde persiste la sesión
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Sesión persistida en `window.localStorage` (valores JSON vía gloo-storage)
pub struct LocalStorageSessionStore;

impl LocalStorageSessionStore {
    /// `false` en modo privado estricto o con storage deshabilitado
    pub fn available() -> bool {
        window().and_then(|w| w.local_storage().ok()).flatten().is_some()
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        LocalStorage::set(key, value).map_err(|e| format!("Erro salvando '{}' no localStorage: {}", key, e))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        LocalStorage::delete(key);
        Ok(())
    }
}

/// Almacenamiento en memoria (tests y navegadores sin localStorage)
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Contexto de sesión compartido por router, API client y vistas
#[derive(Clone)]
pub struct SessionContext {
    current: Rc<RefCell<Option<Session>>>,
    store: Rc<dyn SessionStore>,
}

impl SessionContext {
    /// Restaurar la sesión guardada (arranque de la app)
    pub fn restore(store: Rc<dyn SessionStore>) -> Self {
        let context = Self {
            current: Rc::new(RefCell::new(None)),
            store,
        };

        let token = context.store.read(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty());
        let role = context.store.read(ROLE_STORAGE_KEY);

        match (token, role) {
            (Some(token), Some(role)) => match role.parse::<Role>() {
                Ok(role) => {
                    let user_id = context.store.read(USER_ID_STORAGE_KEY);
                    log::info!("💾 [SESSION] Sessão restaurada (perfil: {})", role);
                    *context.current.borrow_mut() = Some(Session::new(token, role).with_user_id(user_id));
                }
                Err(e) => {
                    log::warn!("⚠️ [SESSION] Sessão guardada inválida ({}), limpando", e);
                    context.teardown();
                }
            },
            (None, None) => {}
            _ => {
                log::warn!("⚠️ [SESSION] Sessão guardada incompleta, limpando");
                context.teardown();
            }
        }

        context
    }

    /// Iniciar sesión (después de un login exitoso)
    pub fn begin(&self, session: Session) {
        let mut writes = vec![
            self.store.write(TOKEN_STORAGE_KEY, &session.token),
            self.store.write(ROLE_STORAGE_KEY, session.role.as_str()),
        ];
        writes.push(match &session.user_id {
            Some(id) => self.store.write(USER_ID_STORAGE_KEY, id),
            None => self.store.remove(USER_ID_STORAGE_KEY),
        });
        for result in writes {
            if let Err(e) = result {
                log::error!("❌ [SESSION] {}", e);
            }
        }

        log::info!("🔐 [SESSION] Sessão iniciada (perfil: {})", session.role);
        *self.current.borrow_mut() = Some(session);
    }

    /// Cerrar sesión: limpia memoria y storage
    pub fn teardown(&self) {
        for key in [TOKEN_STORAGE_KEY, ROLE_STORAGE_KEY, USER_ID_STORAGE_KEY] {
            if let Err(e) = self.store.remove(key) {
                log::error!("❌ [SESSION] {}", e);
            }
        }
        if self.current.borrow_mut().take().is_some() {
            log::info!("👋 [SESSION] Sessão encerrada");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.current.borrow().as_ref().map(|s| s.role)
    }

    pub fn user_id(&self) -> Option<String> {
        self.current.borrow().as_ref().and_then(|s| s.user_id.clone())
    }
}
