mod test_go;
mod util;
