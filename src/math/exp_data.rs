//! Double-double table for the exponential family.
//!
//! `EXP2_TABLE[j]` holds 2^(j/32) as `(hi, lo)` binary128 bit patterns with
//! `hi` correctly rounded and `lo` the rounded residual.

pub(crate) static EXP2_TABLE: [(u128, u128); 32] = [
    (0x3fff_0000_0000_0000_0000_0000_0000_0000, 0x0000_0000_0000_0000_0000_0000_0000_0000),
    (0x3fff_059b_0d31_5857_43ae_7c54_8eb6_8ca4, 0x3f8b_7fe5_3e34_95f7_df4b_af84_a05e_2a0d),
    (0x3fff_0b55_86cf_9890_f629_8b92_b718_42aa, 0xbf8d_f26f_5baf_dd30_c53d_7575_15ea_64eb),
    (0x3fff_1130_1d01_25b5_0a4e_bbf1_aed9_318d, 0xbf8b_53a3_3b85_4e99_11a8_bd8e_8794_f00a),
    (0x3fff_172b_83c7_d517_adcd_f7c8_c50e_b14a, 0x3f8d_e480_d542_7fdf_5d61_a4fc_8f09_af74),
    (0x3fff_1d48_7316_8b9a_a780_5b80_2899_0f08, 0xbf8d_59d2_f77e_46e7_a64c_3eb8_a379_8e48),
    (0x3fff_2387_a6e7_5623_866c_1fad_b1c1_5cb6, 0xbf8d_b13f_35ea_65bf_4825_86c8_76fe_1a85),
    (0x3fff_29e9_df51_fdee_12c2_5d15_f5a2_4aa4, 0xbf8d_0d5d_bd4f_dcb7_f004_9fd7_e502_4e5a),
    (0x3fff_306f_e0a3_1b71_52de_8d5a_4630_5c86, 0xbf8b_2134_3d8c_bc9d_60af_d0e5_0e93_4682),
    (0x3fff_371a_7373_aa9c_aa71_4550_2f45_4798, 0x3f8d_f8f8_4945_afe7_1a66_f90c_bb4e_cd85),
    (0x3fff_3dea_64c1_2342_235b_4122_3e13_d774, 0xbf89_174d_1f51_f6ef_660e_aeef_0344_00c2),
    (0x3fff_44e0_8606_1892_d031_36f4_09df_01a0, 0xbf8d_0ac3_12de_3d92_1e9b_8a8d_2c2c_336f),
    (0x3fff_4bfd_ad53_62a2_71d4_397a_fec4_2e21, 0xbf8b_fc9c_45d1_ea63_a860_7d1b_4ec6_ceb0),
    (0x3fff_5342_b569_d4f8_1df0_a83c_49d8_6a64, 0xbf8a_6331_ab83_7acf_f49f_6d73_68d8_777f),
    (0x3fff_5ab0_7dd4_8542_958c_9301_5191_eb34, 0x3f8d_7623_5f20_4a03_81a7_ef6d_8b2f_8a0c),
    (0x3fff_6247_eb03_a558_4b1f_0fa0_6fd2_da43, 0xbf8d_138c_5418_2337_6291_d443_4189_3b79),
    (0x3fff_6a09_e667_f3bc_c908_b2fb_1366_ea95, 0x3f8d_f4f8_eb7b_05d4_49dd_4267_68bd_642c),
    (0x3fff_71f7_5e8e_c5f7_3dd2_370f_2ef0_acd7, 0xbf8c_a5e5_a54e_930b_aefa_912c_dd28_76c1),
    (0x3fff_7a11_473e_b018_6d7d_5102_3f6c_da1f, 0x3f8d_7bd0_ad9a_5de5_814c_7a08_6cd2_5f01),
    (0x3fff_8258_9994_cce1_28ac_f88a_fab3_4a01, 0x3f8a_ed5a_cb97_7581_ea65_a737_bfbf_b9cb),
    (0x3fff_8ace_5422_aa0d_b5ba_7c55_a192_c9bb, 0x3f8c_f376_b0f9_3999_8251_a36c_7686_006e),
    (0x3fff_9373_7b0c_dc5e_4f45_01c3_f254_0a23, 0xbf8c_681d_a853_f24e_0be6_c880_b22f_dc00),
    (0x3fff_9c49_182a_3f09_01c7_c46b_071f_2be6, 0xbf8d_c894_86bc_f7a3_9e4d_bd2e_a216_33a8),
    (0x3fff_a550_3b23_e255_c8b4_2449_1caf_87bd, 0xbf8d_febd_6feb_1fa3_f042_0d40_2c4c_e7e6),
    (0x3fff_ae89_f995_ad3a_d5e8_734d_1773_205a, 0x3f8d_fef0_eb99_d7a9_102c_58b5_ae09_d6d0),
    (0x3fff_b7f7_6f2f_b5e4_6eaa_7b08_1ab5_3c53, 0x3f8d_5322_40f0_d5b9_2d89_6ab3_09d8_68ee),
    (0x3fff_c199_bdd8_5529_c222_0cb1_2a09_1ba6, 0x3f8d_9e51_1259_28d9_9849_0010_e5cc_e9f9),
    (0x3fff_cb72_0dce_f906_9150_3cbd_1e94_9db7, 0x3f8d_8765_566b_032d_b74f_b566_77e6_adb1),
    (0x3fff_d581_8dcf_ba48_725d_a05a_eb66_e0dd, 0xbf8d_5829_d82a_98fd_e240_371f_4139_70ba),
    (0x3fff_dfc9_7337_b9b5_eb96_8cac_39ed_291b, 0x3f8d_c896_a513_bf56_ed54_92e4_9c94_3842),
    (0x3fff_ea4a_fa2a_490d_9858_f73a_18f5_db30, 0x3f8b_f86d_ea20_610c_eee1_3eb7_bb00_6527),
    (0x3fff_f507_65b6_e454_0674_f84b_7628_62bb, 0xbf85_9bff_c80e_f2b5_1759_1dbd_da6b_205b),
];
