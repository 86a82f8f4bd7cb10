mod quiz_flow;
mod rendering;
