use warden_model::Actor;

#[derive(Clone, Debug)]
pub enum Message {
    ResolveActor,
    ActorResolved(Result<Option<Actor>, String>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResolveActor => "Auth::ResolveActor",
            Self::ActorResolved(_) => "Auth::ActorResolved",
        }
    }
}
