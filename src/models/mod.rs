pub mod legal;
pub mod user;

pub use legal::{
    ConsultaLegal, DocumentoLegal, EstadisticasApi, RespuestaLegal, SaludApi, TipoLenguaje,
};
pub use user::{
    RegisterPayload, Role, SortBy, SortOrder, TokenResponse, User, UserCreate, UserQuery,
    UserUpdate, UsersPaged,
};
