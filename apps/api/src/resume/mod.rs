// Résumé generation: request models, the render-and-report pipeline, and the HTTP
// handlers that run it on the blocking pool.

pub mod generator;
pub mod handlers;
pub mod models;
