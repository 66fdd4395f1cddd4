//! Navegación entre aulas y módulos como función pura `(estado, evento) -> estado`.

use crate::data::Catalog;

/// Qué destaca la pantalla del módulo además del reproductor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Player,
    /// Última aula de un módulo que no es el último: "Seguir para o módulo N".
    NextModuleOffer,
    /// Última aula del último módulo.
    Congratulations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSession {
    pub module: usize,
    pub lesson: usize,
    pub focus: Focus,
}

impl ModuleSession {
    pub fn open(module: usize, lesson: usize) -> Self {
        Self {
            module,
            lesson,
            focus: Focus::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    SelectLesson(usize),
    NextLesson,
    PreviousLesson,
    NextModule,
}

/// Escritura de progreso que la transición pide hacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressWrite {
    pub lesson_index: usize,
    pub completed_lessons: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub session: ModuleSession,
    pub write: Option<ProgressWrite>,
    /// true si se cambió de módulo (la UI vuelve arriba, como al abrirlo).
    pub switched_module: bool,
}

impl Transition {
    fn stay(session: ModuleSession) -> Self {
        Self {
            session,
            write: None,
            switched_module: false,
        }
    }

    fn switch(session: ModuleSession) -> Self {
        Self {
            session,
            write: None,
            switched_module: true,
        }
    }
}

/// Aplica un evento. `completed` es el `completed_lessons` guardado del módulo actual.
///
/// Ver una aula la marca (a ella y a las anteriores) como completada; no hay
/// señal de "visto hasta el final" desde el reproductor.
pub fn step(
    catalog: &Catalog,
    session: ModuleSession,
    completed: usize,
    event: NavEvent,
) -> Transition {
    let Some(module) = catalog.modules.get(session.module) else {
        return Transition::stay(session);
    };

    match event {
        NavEvent::SelectLesson(index) => Transition {
            session: ModuleSession {
                module: session.module,
                lesson: index,
                focus: Focus::Player,
            },
            write: Some(ProgressWrite {
                lesson_index: index,
                completed_lessons: completed.max(index + 1),
            }),
            switched_module: false,
        },
        NavEvent::NextLesson => {
            if session.lesson >= module.last_lesson_index() {
                let focus = if catalog.is_last_module(session.module) {
                    Focus::Congratulations
                } else {
                    Focus::NextModuleOffer
                };
                Transition::stay(ModuleSession { focus, ..session })
            } else {
                step(
                    catalog,
                    session,
                    completed,
                    NavEvent::SelectLesson(session.lesson + 1),
                )
            }
        }
        NavEvent::PreviousLesson => {
            if session.lesson > 0 {
                step(
                    catalog,
                    session,
                    completed,
                    NavEvent::SelectLesson(session.lesson - 1),
                )
            } else if let Some(prev) = catalog.previous_module(session.module) {
                Transition::switch(ModuleSession::open(
                    session.module - 1,
                    prev.last_lesson_index(),
                ))
            } else {
                Transition::stay(session)
            }
        }
        NavEvent::NextModule => {
            if catalog.next_module(session.module).is_some() {
                // siempre desde la primera aula
                Transition::switch(ModuleSession::open(session.module + 1, 0))
            } else {
                Transition::stay(session)
            }
        }
    }
}

/// Banner al pie del módulo, derivado solo de la compleción.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBanner {
    None,
    NextModule { number: usize },
    AllModulesComplete,
}

pub fn completion_banner(catalog: &Catalog, module: usize, completed: usize) -> CompletionBanner {
    match catalog.modules.get(module) {
        Some(m) if m.is_completed_by(completed) => {
            if catalog.next_module(module).is_some() {
                CompletionBanner::NextModule { number: module + 2 }
            } else {
                CompletionBanner::AllModulesComplete
            }
        }
        _ => CompletionBanner::None,
    }
}
