pub mod app_reducer;
pub mod cart_reducer;
pub mod remote_list_reducer;
pub mod shop_reducer;
pub mod stopwatch_reducer;
