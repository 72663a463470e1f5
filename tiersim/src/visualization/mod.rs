pub mod tiersim_vis2d;
