pub mod a001_proveedor;
pub mod a002_tela;
pub mod a003_inventario_tela;
pub mod a004_parametros_tela;
pub mod a005_costurero;
pub mod a006_trabajo;
pub mod a007_trabajo_finalizado;
pub mod a008_categoria;
pub mod a009_producto;
pub mod a010_tienda;
pub mod a011_sucursal;
pub mod a012_inventario_tienda;
pub mod a013_inventario_sucursal;
pub mod a014_venta;
pub mod a015_carrito;
pub mod a016_config_web;
